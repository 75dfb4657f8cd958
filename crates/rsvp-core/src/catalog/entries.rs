//! Built-in message texts for every supported locale.

use std::collections::HashMap;

use super::keys;
use crate::locale::Locale;

/// One catalog entry for one locale.
#[derive(Debug, Clone)]
pub(super) enum Template {
    /// A single template.
    Text(&'static str),
    /// Interchangeable phrasings with their selection weights.
    Weighted(&'static [(u32, &'static str)]),
    /// Singular and plural forms of a word or phrase.
    Plural {
        one: &'static str,
        many: &'static str,
    },
}

pub(super) type LocaleTable = HashMap<Locale, Template>;

fn text(en: &'static str, tl: &'static str, bis: &'static str) -> LocaleTable {
    HashMap::from([
        (Locale::En, Template::Text(en)),
        (Locale::Tl, Template::Text(tl)),
        (Locale::Bis, Template::Text(bis)),
    ])
}

fn plural(en: [&'static str; 2], tl: [&'static str; 2], bis: [&'static str; 2]) -> LocaleTable {
    let forms = |[one, many]: [&'static str; 2]| Template::Plural { one, many };
    HashMap::from([
        (Locale::En, forms(en)),
        (Locale::Tl, forms(tl)),
        (Locale::Bis, forms(bis)),
    ])
}

const MORE_NAMES_PROMPT_EN: &[(u32, &str)] = &[
    (3, "✅ Got it! You still have {remaining} {seats}. Please add more name(s)."),
    (2, "👍 Name saved. {remaining} {seats} left — feel free to add another guest."),
    (2, "📌 Noted! {remaining} more {seats} available. Who else is coming?"),
    (2, "👌 Thanks! We’re expecting {remaining} more guest(s). Kindly type their name."),
    (1, "📝 All set! {remaining} open {seats} to fill. Add another name when ready."),
];

const MORE_NAMES_PROMPT_TL: &[(u32, &str)] = &[
    (3, "✅ Salamat! May natitira pa kayong {remaining} {seats}. Paki-enter na lang po ang karagdagang pangalan."),
    (2, "👍 Naka-save na. {remaining} {seats} pa po ang bakante. Maaari pang magdagdag ng pangalan."),
    (2, "📌 Noted! May {remaining} {seats} pang natitira. Sino pa po ang kasama ninyo?"),
    (2, "👌 Sige po! Inaasahan pa ang {remaining} pang bisita. Pakitype po ang pangalan."),
    (1, "📝 Ayos! May {remaining} {seats} pa po. Ilagay na lang po ang pangalan kung sino pa ang kasama."),
];

const MORE_NAMES_PROMPT_BIS: &[(u32, &str)] = &[
    (3, "✅ Nakuha na! Naay nabilin nga {remaining} ka {seats}. Palihug i-dugang ang pangalan."),
    (2, "👍 Nasave na. {remaining} ka {seats} pa ang bakante. Kinsay sunod nga muapil?"),
    (2, "📌 Okay! {remaining} pa ka {seats} ang kuwang. Palihug sulati ang pangalan."),
    (2, "👌 Salamat! Gipaabot pa nato ang {remaining} ka bisita. Isulat ilang ngalan."),
    (1, "📝 Nice! Naa pay {remaining} ka {seats}. I-type lang ang sunod nga pangalan."),
];

pub(super) fn builtin() -> HashMap<&'static str, LocaleTable> {
    let mut entries = HashMap::new();

    entries.insert(
        keys::GREETING,
        text(
            "💌 Greetings!\n\nYou are invited to the wedding of Voughn and Emelyn!\n\nBased on the number of seats shown in your electronic invitation, kindly tell us how many guest(s) will be attending. 😊",
            "💌 Kumusta!\n\nInaanyayahan ka sa kasal nina Voughn at Emelyn!\n\nBatay sa bilang ng upuan sa iyong imbitasyong digital, ilan po ang inaasahang dadalo? 😊",
            "💌 Kumusta!\n\nGiinbitahan ka sa kasal ni Voughn ug Emelyn!\n\nBase sa gidaghanon sa lingkuranan sa imong online na imbitasyon, pila kabuok ang moanhi? 😊",
        ),
    );
    entries.insert(
        keys::MUST_USE_RSVP,
        text(
            "Hi! To RSVP, please click the RSVP button on our website first so we can properly record your names. 😊",
            "Hi! Para makapag-RSVP, pakiclick muna ang RSVP button sa aming website para maitala namin nang maayos ang mga pangalan. 😊",
            "Hi! Para mag-RSVP, palihug i-click una ang RSVP button sa among website aron ma-record namo sakto ang inyong mga ngalan. 😊",
        ),
    );
    // Shown before a locale exists, so English only.
    entries.insert(
        keys::CHOOSE_LANGUAGE,
        HashMap::from([(
            Locale::En,
            Template::Text(
                "🌐 Please choose a language first / Pumili muna ng wika / Pili una og pinulongan:\n1) English  2) Tagalog  3) Bisaya",
            ),
        )]),
    );
    entries.insert(
        keys::SEAT_COUNT_CONFIRMED,
        text(
            "Great! You may now RSVP up to {count} {guests|guest}.",
            "Ayos! Maaari ka nang mag-RSVP ng hanggang {count} {mga bisita|bisita}.",
            "Sige! Pwede naka mag-RSVP og hangtod {count} ka {mga bisita|bisita}.",
        ),
    );
    entries.insert(
        keys::GUEST_INSTRUCTIONS_SINGLE,
        text(
            "Please reply with the guest's FULL name. 😊\n\n(sample: Juan P. Dela Cruz)",
            "Pakireply po ng BUONG pangalan ng bisita. 😊\n\n(Halimbawa: Juan P. Dela Cruz)",
            "Palihug isulat ang KUMPLETONG ngalan sa bisita. 😊\n\n(Pananglitan: Juan P. Dela Cruz)",
        ),
    );
    entries.insert(
        keys::GUEST_INSTRUCTIONS_MULTIPLE,
        text(
            "Please also note that I can only receive one name at a time, so please reply with the guests FULL names one by one. 😊\n\n(sample: Juan P. Dela Cruz)",
            "Pakitandaan din po na isang pangalan lang ang matatanggap ko sa bawat pagkakataon, kaya pakireply na lang po paisa-isa ang BUONG pangalan ng bawat bisita. 😊\n\n(Halimbawa: Juan P. Dela Cruz)",
            "Palihug hinumdumi nga usa ka ngalan lang ang akong madawat sa usa ka higayon, busa isulat tag-isa ang KUMPLETONG ngalan sa matag bisita. 😊\n\n(Pananglitan: Juan P. Dela Cruz)",
        ),
    );
    entries.insert(
        keys::INVALID_SEAT_COUNT,
        text(
            "⚠️ Please enter a valid number of seats (1–10).",
            "⚠️ Pakilagay po ang tamang bilang ng upuan (1–10).",
            "⚠️ Palihug isulat ang sakto nga ihap sa lingkuranan (1–10).",
        ),
    );
    entries.insert(
        keys::INVALID_NAME,
        text(
            "Hmm... that doesn’t look like a valid name or a FULL name. Could you double-check and try again? 😊",
            "Hmm... parang hindi wasto ang pangalan o hindi BUO. Paki-check po ulit at subukang muli. 😊",
            "Hmm... murag dili tinuod o dili kumpleto ang pangalan. Palihug i-check ug usba. 😊",
        ),
    );
    entries.insert(
        keys::DUPLICATE_NAME,
        text(
            "🚫 That guest has already RSVP’d. Please enter other names. Thank you! 😊",
            "🚫 Nakapag-RSVP na po ang pangalang iyan. Pakilagay po ng ibang pangalan. Salamat! 😊",
            "🚫 Nakapa-RSVP na na nga ngalan. Palihug sulati ug laing ngalan. Salamat! 😊",
        ),
    );
    entries.insert(
        keys::ALL_NAMES_COLLECTED,
        text(
            "🎉 Thank you! Here are the name(s) you've sent us:<br><br>{names}<br><br>Can you double check if everything is correct? Please reply \"Yes\" or \"No\".",
            "🎉 Salamat po! Narito ang mga pangalan na inyong ibinigay:<br><br>{names}<br><br>Pakisuri po kung tama lahat. Pakisagot ng \"Tama\" o \"Mali\".",
            "🎉 Salamat kaayo! Mao ni ang mga pangalan nga inyong gi-submit:<br><br>{names}<br><br>Palihug i-check kung sakto ba tanan. Tubaga lang og \"Sakto\" o \"Dili\".",
        ),
    );
    entries.insert(
        keys::CONFIRM_PROMPT,
        text(
            "Please reply \"Yes\" if the list is correct, or \"No\" to re-enter the names. 😊",
            "Pakisagot po ng \"Tama\" kung tama ang listahan, o \"Mali\" para ulitin ang mga pangalan. 😊",
            "Palihug tubaga og \"Sakto\" kung sakto ang lista, o \"Dili\" aron usbon ang mga ngalan. 😊",
        ),
    );
    entries.insert(
        keys::RSVP_SAVED,
        text(
            "🎉 Thank you! We've recorded {count} guest name{plural}.<br><br>We kindly ask that these seats are joyfully filled on the day of the event, so the heartfelt efforts and careful preparations of the bride and groom can be fully cherished. 😊<br><br>Looking forward to seeing you! 💖",
            "🎉 Maraming salamat! Naitala na po namin ang {count}{plural}.<br><br>Inaasahan po namin na ang mga upuang ito ay masayang mapupuno sa araw ng kasal upang ang masusing paghahanda ng bride at groom ay tunay na mapahalagahan. 😊<br><br>Excited na po kaming makita kayo! 💖",
            "🎉 Daghang salamat! Among natala ang {count}{plural}.<br><br>Nagpaabot mi nga malipayong mapuno ang mga lingkuranan sa adlaw sa kasal, aron ang gugma ug paningkamot sa bride ug groom mapanggaon gyud. 😊<br><br>Excited na kaayo mi makakita ninyo! 💖",
        ),
    );
    entries.insert(
        keys::RSVP_SAVE_ERROR,
        text(
            "⚠️ Something went wrong while saving your RSVP. Please try again later.",
            "⚠️ Nagka-problema sa pag-save ng RSVP. Subukan ulit mamaya.",
            "⚠️ Naay problema sa pag-tipig sa RSVP. Palihug suwayi og balik unya.",
        ),
    );
    entries.insert(
        keys::REENTER_NAMES,
        text(
            "No problem! Please re-enter the names one by one. 😊",
            "Walang problema! Pakireply na lang po ulit ng mga pangalan paisa-isa. 😊",
            "Walay problema! Palihug isulat balik tag-isa ang mga ngalan. 😊",
        ),
    );
    entries.insert(
        keys::MAX_NAMES_REACHED,
        text(
            "✅ You've already added {count} {guests|guest}. If you need to make changes, please message us directly. 😊",
            "✅ Naitala na ang {count} {mga bisita|bisita}. Kung may babaguhin, pakimesahe na lang po kami. 😊",
            "✅ Nakadugang naka og {count} ka {mga bisita|bisita}. Kung naay usbon, palihug i-message lang mi. 😊",
        ),
    );
    entries.insert(
        keys::IDLE_CHECK_IN,
        text(
            "👋 Just checking in — are you still there? You can keep adding names or reply 'No' to finish.",
            "👋 Kumusta? Nandiyan ka pa ba? Pwede ka pa magdagdag ng pangalan o mag-reply ng 'Hindi' para matapos.",
            "👋 Kumusta? Ania pa ba ka? Pwede pa ka magdugang og ngalan o mag-reply og 'Dili' para mahuman.",
        ),
    );
    entries.insert(
        keys::IDLE_TIMEOUT,
        text(
            "⏱️ Looks like you're away. We'll end this RSVP session for now. You can start again anytime. 😊",
            "⏱️ Mukhang wala ka na. Tatapusin na namin ang RSVP session. Pwede kang magsimula ulit anumang oras. 😊",
            "⏱️ Murag wala naka. Tapuson na namo ang RSVP session karon. Pwede ka magsugod balik bisan kanus-a. 😊",
        ),
    );
    entries.insert(
        keys::PARTIAL_LIST,
        text(
            "🎉 Thank you! Here are the name(s) you've sent us:<br><br>{names}<br><br>You still have {remaining} {seats} left. Please enter {needed} or reply 'No' to finish.",
            "🎉 Salamat po! Narito ang mga pangalan na inyong ibinigay:<br><br>{names}<br><br>May natitira pa kayong {remaining} {seats}. Pakienter na lang po ang {needed} o mag-reply ng 'Hindi' para matapos.",
            "🎉 Salamat kaayo! Mao ni ang mga pangalan nga inyong gi-submit:<br><br>{names}<br><br>Naay nabilin nga {remaining} ka {seats}. Palihug isulat ang {needed} o mag-reply og 'Dili' para mahuman.",
        ),
    );
    entries.insert(
        keys::MORE_NAMES_PROMPT,
        HashMap::from([
            (Locale::En, Template::Weighted(MORE_NAMES_PROMPT_EN)),
            (Locale::Tl, Template::Weighted(MORE_NAMES_PROMPT_TL)),
            (Locale::Bis, Template::Weighted(MORE_NAMES_PROMPT_BIS)),
        ]),
    );
    entries.insert(
        keys::NO_RSVP,
        text(
            "No problem! Let us know if you change your mind. 😊",
            "Walang problema! Sabihin lang po kung magbabago ang desisyon ninyo. 😊",
            "Walay problema! Ingna lang mi kung mausab imong huna-huna. 😊",
        ),
    );

    // Count-sensitive forms
    entries.insert(
        keys::SEAT,
        plural(
            ["seat", "seats"],
            ["upuan", "upuan"],
            ["lingkuranan", "lingkuranan"],
        ),
    );
    entries.insert(
        keys::NAME_SUFFIX,
        plural(
            ["", "s"],
            [" na pangalan", " na mga pangalan"],
            [" ka pangalan", " ka mga pangalan"],
        ),
    );
    entries.insert(
        keys::MORE_NAMES,
        plural(
            ["one more name", "{count} more names"],
            ["isang pangalan pa", "{count} pang pangalan"],
            ["usa ka ngalan pa", "{count} pa ka ngalan"],
        ),
    );

    entries
}
