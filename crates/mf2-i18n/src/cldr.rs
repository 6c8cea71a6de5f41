//! CLDR cardinal plural category sets, keyed by language (or language-region).

use crate::pluralization::PluralCategory::{self, Few, Many, One, Other, Two, Zero};
use once_cell::sync::Lazy;
use std::collections::HashMap;

const OTHER: &[PluralCategory] = &[Other];
const ONE_OTHER: &[PluralCategory] = &[One, Other];
const ZERO_ONE_OTHER: &[PluralCategory] = &[Zero, One, Other];
const ONE_TWO_OTHER: &[PluralCategory] = &[One, Two, Other];
const ONE_FEW_OTHER: &[PluralCategory] = &[One, Few, Other];
const ONE_MANY_OTHER: &[PluralCategory] = &[One, Many, Other];
const ONE_TWO_FEW_OTHER: &[PluralCategory] = &[One, Two, Few, Other];
const ONE_FEW_MANY_OTHER: &[PluralCategory] = &[One, Few, Many, Other];
const ONE_TWO_FEW_MANY_OTHER: &[PluralCategory] = &[One, Two, Few, Many, Other];
const ALL: &[PluralCategory] = &[Zero, One, Two, Few, Many, Other];

const GROUPS: &[(&[PluralCategory], &[&str])] = &[
    (
        OTHER,
        &[
            "bm", "bo", "dz", "hnj", "id", "ig", "ii", "in", "ja", "jbo", "jv", "jw", "kde",
            "kea", "km", "ko", "lkt", "lo", "ms", "my", "nqo", "osa", "sah", "ses", "sg", "su",
            "th", "to", "tpi", "vi", "wo", "yo", "yue", "zh",
        ],
    ),
    (
        ONE_OTHER,
        &[
            "af", "ak", "am", "an", "as", "asa", "ast", "az", "bal", "bem", "bez", "bg", "bho",
            "bn", "brx", "ce", "ceb", "cgg", "chr", "ckb", "csw", "da", "de", "doi", "dv", "ee",
            "el", "en", "eo", "et", "eu", "fa", "ff", "fi", "fil", "fo", "fur", "fy", "gl", "gsw",
            "gu", "guw", "ha", "haw", "hi", "hu", "hy", "ia", "io", "is", "ji", "jgo", "jmc", "ka",
            "kab", "kaj", "kcg", "kk", "kkj", "kl", "kn", "ks", "ksb", "ku", "ky", "lb", "lg",
            "lij", "ln", "mas", "mg", "mgo", "mk", "ml", "mn", "mr", "nah", "nb", "nd", "ne", "nl",
            "nn", "nnh", "no", "nr", "nso", "ny", "nyn", "om", "or", "os", "pa", "pap", "pcm",
            "ps", "rm", "rof", "rwk", "saq", "sc", "sd", "sdh", "seh", "si", "sn", "so", "sq",
            "ss", "ssy", "st", "sv", "sw", "syr", "ta", "te", "teo", "ti", "tig", "tk", "tl",
            "tn", "tr", "ts", "ug", "ur", "uz", "ve", "vo", "vun", "wa", "wae", "xh", "xog",
            "yi", "zu",
        ],
    ),
    (ZERO_ONE_OTHER, &["ksh", "lag", "lv", "prg"]),
    (
        ONE_TWO_OTHER,
        &["he", "iu", "naq", "sat", "se", "sma", "smi", "smj", "smn", "sms"],
    ),
    (ONE_FEW_OTHER, &["bs", "hr", "mo", "ro", "sh", "shi", "sr"]),
    (ONE_MANY_OTHER, &["ca", "es", "fr", "it", "pt", "pt-PT", "vec"]),
    (ONE_TWO_FEW_OTHER, &["dsb", "gd", "hsb", "sl"]),
    (ONE_FEW_MANY_OTHER, &["be", "cs", "lt", "pl", "ru", "sk", "uk"]),
    (ONE_TWO_FEW_MANY_OTHER, &["br", "ga", "gv", "mt"]),
    (ALL, &["ar", "ars", "cy", "kw"]),
];

/// Category sets keyed by language subtag, plus a few language-region keys
/// whose rules differ from the bare language.
pub static CARDINAL_CATEGORIES: Lazy<HashMap<&'static str, &'static [PluralCategory]>> =
    Lazy::new(|| {
        GROUPS
            .iter()
            .flat_map(|(categories, languages)| {
                languages.iter().map(move |language| (*language, *categories))
            })
            .collect()
    });
