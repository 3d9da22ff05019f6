//! Plural rule tables derived from the CLDR plural rules data.
//!
//! Frozen data: each function below is the compiled form of one CLDR rule
//! group (many locales share a group), and [`cardinal`]/[`ordinal`] map a
//! normalized locale tag to its group. Locales whose ordinal rules are
//! `other`-everywhere are simply absent from the ordinal table.
//!
//! Rule bodies are written against the CLDR operands (`n`, `i`, `v`, `w`,
//! `f`, `t`); see [`crate::PluralOperands`]. Range conditions such as
//! `n = 3..10` match integers only, per the CLDR rule syntax.

use crate::PluralCategory::{self, Few, Many, One, Other, Two, Zero};
use crate::{PluralOperands, RuleFn};

// ---------------------------------------------------------------------------
// Condition helpers mirroring the CLDR rule syntax
// ---------------------------------------------------------------------------

/// `n = k` (the numeric value equals the integer `k`).
#[inline]
fn n_eq(op: &PluralOperands, k: u64) -> bool {
    op.n == k as f64
}

/// `n = lo..hi` (integer values only, per CLDR range semantics).
#[inline]
fn n_in(op: &PluralOperands, lo: u64, hi: u64) -> bool {
    op.n == op.n.trunc() && op.n >= lo as f64 && op.n <= hi as f64
}

/// `n % m` as an exact value (integer-valued iff `n` is).
#[inline]
fn n_mod(op: &PluralOperands, m: u64) -> f64 {
    op.n % m as f64
}

/// `n % m = k`.
#[inline]
fn n_mod_eq(op: &PluralOperands, m: u64, k: u64) -> bool {
    n_mod(op, m) == k as f64
}

/// `n % m = lo..hi` (integer remainders only).
#[inline]
fn n_mod_in(op: &PluralOperands, m: u64, lo: u64, hi: u64) -> bool {
    let r = n_mod(op, m);
    r == r.trunc() && r >= lo as f64 && r <= hi as f64
}

#[inline]
fn in_u(x: u64, lo: u64, hi: u64) -> bool {
    (lo..=hi).contains(&x)
}

// ---------------------------------------------------------------------------
// Cardinal rule groups
// ---------------------------------------------------------------------------

/// No plural distinction (East and Southeast Asian group, and others).
fn c_other(_op: &PluralOperands) -> PluralCategory {
    Other
}

/// `one: i = 1 and v = 0` — English, German, Dutch, Italian, Swedish, …
fn c_germanic(op: &PluralOperands) -> PluralCategory {
    if op.i == 1 && op.v == 0 {
        One
    } else {
        Other
    }
}

/// `one: n = 1` — Greek, Spanish, Turkish, Hungarian, Bulgarian, …
fn c_one_n1(op: &PluralOperands) -> PluralCategory {
    if n_eq(op, 1) {
        One
    } else {
        Other
    }
}

/// `one: i = 0,1` — French, Portuguese, Armenian, Fulah, Kabyle.
fn c_romance_i01(op: &PluralOperands) -> PluralCategory {
    if op.i <= 1 {
        One
    } else {
        Other
    }
}

/// `one: i = 0 or n = 1` — Hindi, Bengali, Persian, Amharic, Gujarati, …
fn c_indic(op: &PluralOperands) -> PluralCategory {
    if op.i == 0 || n_eq(op, 1) {
        One
    } else {
        Other
    }
}

/// `one: n = 0..1` — Akan, Lingala, Punjabi, Tigrinya, Walloon, …
fn c_zero_through_one(op: &PluralOperands) -> PluralCategory {
    if op.n >= 0.0 && op.n <= 1.0 {
        One
    } else {
        Other
    }
}

/// East Slavic: Russian, Ukrainian.
fn c_east_slavic(op: &PluralOperands) -> PluralCategory {
    let i10 = op.i % 10;
    let i100 = op.i % 100;
    if op.v == 0 && i10 == 1 && i100 != 11 {
        One
    } else if op.v == 0 && in_u(i10, 2, 4) && !in_u(i100, 12, 14) {
        Few
    } else if op.v == 0 && (i10 == 0 || in_u(i10, 5, 9) || in_u(i100, 11, 14)) {
        Many
    } else {
        Other
    }
}

/// Belarusian (n-based: fractions land in the integer categories too).
fn c_be(op: &PluralOperands) -> PluralCategory {
    if n_mod_eq(op, 10, 1) && !n_mod_eq(op, 100, 11) {
        One
    } else if n_mod_in(op, 10, 2, 4) && !n_mod_in(op, 100, 12, 14) {
        Few
    } else if n_mod_eq(op, 10, 0) || n_mod_in(op, 10, 5, 9) || n_mod_in(op, 100, 11, 14) {
        Many
    } else {
        Other
    }
}

/// Polish.
fn c_pl(op: &PluralOperands) -> PluralCategory {
    let i10 = op.i % 10;
    let i100 = op.i % 100;
    if op.i == 1 && op.v == 0 {
        One
    } else if op.v == 0 && in_u(i10, 2, 4) && !in_u(i100, 12, 14) {
        Few
    } else if op.v == 0
        && (op.i != 1 && i10 <= 1 || in_u(i10, 5, 9) || in_u(i100, 12, 14))
    {
        Many
    } else {
        Other
    }
}

/// Czech, Slovak.
fn c_czech(op: &PluralOperands) -> PluralCategory {
    if op.i == 1 && op.v == 0 {
        One
    } else if in_u(op.i, 2, 4) && op.v == 0 {
        Few
    } else if op.v != 0 {
        Many
    } else {
        Other
    }
}

/// Slovenian.
fn c_sl(op: &PluralOperands) -> PluralCategory {
    let i100 = op.i % 100;
    if op.v == 0 && i100 == 1 {
        One
    } else if op.v == 0 && i100 == 2 {
        Two
    } else if op.v == 0 && in_u(i100, 3, 4) || op.v != 0 {
        Few
    } else {
        Other
    }
}

/// Serbo-Croatian group: Bosnian, Croatian, Serbian.
fn c_south_slavic(op: &PluralOperands) -> PluralCategory {
    let i10 = op.i % 10;
    let i100 = op.i % 100;
    let f10 = op.f % 10;
    let f100 = op.f % 100;
    if op.v == 0 && i10 == 1 && i100 != 11 || f10 == 1 && f100 != 11 {
        One
    } else if op.v == 0 && in_u(i10, 2, 4) && !in_u(i100, 12, 14)
        || in_u(f10, 2, 4) && !in_u(f100, 12, 14)
    {
        Few
    } else {
        Other
    }
}

/// Lithuanian.
fn c_lt(op: &PluralOperands) -> PluralCategory {
    if n_mod_eq(op, 10, 1) && !n_mod_in(op, 100, 11, 19) {
        One
    } else if n_mod_in(op, 10, 2, 9) && !n_mod_in(op, 100, 11, 19) {
        Few
    } else if op.f != 0 {
        Many
    } else {
        Other
    }
}

/// Latvian, Prussian.
fn c_lv(op: &PluralOperands) -> PluralCategory {
    let f10 = op.f % 10;
    let f100 = op.f % 100;
    if n_mod_eq(op, 10, 0) || n_mod_in(op, 100, 11, 19) || op.v == 2 && in_u(f100, 11, 19) {
        Zero
    } else if n_mod_eq(op, 10, 1) && !n_mod_eq(op, 100, 11)
        || op.v == 2 && f10 == 1 && f100 != 11
        || op.v != 2 && f10 == 1
    {
        One
    } else {
        Other
    }
}

/// Romanian.
fn c_ro(op: &PluralOperands) -> PluralCategory {
    if op.i == 1 && op.v == 0 {
        One
    } else if op.v != 0 || n_eq(op, 0) || n_mod_in(op, 100, 2, 19) {
        Few
    } else {
        Other
    }
}

/// Arabic.
fn c_ar(op: &PluralOperands) -> PluralCategory {
    if n_eq(op, 0) {
        Zero
    } else if n_eq(op, 1) {
        One
    } else if n_eq(op, 2) {
        Two
    } else if n_mod_in(op, 100, 3, 10) {
        Few
    } else if n_mod_in(op, 100, 11, 99) {
        Many
    } else {
        Other
    }
}

/// Hebrew.
fn c_he(op: &PluralOperands) -> PluralCategory {
    if op.i == 1 && op.v == 0 {
        One
    } else if op.i == 2 && op.v == 0 {
        Two
    } else if op.v == 0 && !n_in(op, 0, 10) && n_mod_eq(op, 10, 0) {
        Many
    } else {
        Other
    }
}

/// Maltese.
fn c_mt(op: &PluralOperands) -> PluralCategory {
    if n_eq(op, 1) {
        One
    } else if n_eq(op, 2) {
        Two
    } else if n_eq(op, 0) || n_mod_in(op, 100, 3, 10) {
        Few
    } else if n_mod_in(op, 100, 11, 19) {
        Many
    } else {
        Other
    }
}

/// Irish.
fn c_ga(op: &PluralOperands) -> PluralCategory {
    if n_eq(op, 1) {
        One
    } else if n_eq(op, 2) {
        Two
    } else if n_in(op, 3, 6) {
        Few
    } else if n_in(op, 7, 10) {
        Many
    } else {
        Other
    }
}

/// Scottish Gaelic.
fn c_gd(op: &PluralOperands) -> PluralCategory {
    if n_eq(op, 1) || n_eq(op, 11) {
        One
    } else if n_eq(op, 2) || n_eq(op, 12) {
        Two
    } else if n_in(op, 3, 10) || n_in(op, 13, 19) {
        Few
    } else {
        Other
    }
}

/// Welsh.
fn c_cy(op: &PluralOperands) -> PluralCategory {
    if n_eq(op, 0) {
        Zero
    } else if n_eq(op, 1) {
        One
    } else if n_eq(op, 2) {
        Two
    } else if n_eq(op, 3) {
        Few
    } else if n_eq(op, 6) {
        Many
    } else {
        Other
    }
}

/// Breton.
fn c_br(op: &PluralOperands) -> PluralCategory {
    if n_mod_eq(op, 10, 1) && !(n_mod_eq(op, 100, 11) || n_mod_eq(op, 100, 71) || n_mod_eq(op, 100, 91))
    {
        One
    } else if n_mod_eq(op, 10, 2)
        && !(n_mod_eq(op, 100, 12) || n_mod_eq(op, 100, 72) || n_mod_eq(op, 100, 92))
    {
        Two
    } else if (n_mod_in(op, 10, 3, 4) || n_mod_eq(op, 10, 9))
        && !(n_mod_in(op, 100, 10, 19) || n_mod_in(op, 100, 70, 79) || n_mod_in(op, 100, 90, 99))
    {
        Few
    } else if !n_eq(op, 0) && n_mod_eq(op, 1_000_000, 0) {
        Many
    } else {
        Other
    }
}

/// Manx.
fn c_gv(op: &PluralOperands) -> PluralCategory {
    let i10 = op.i % 10;
    let i100 = op.i % 100;
    if op.v == 0 && i10 == 1 {
        One
    } else if op.v == 0 && i10 == 2 {
        Two
    } else if op.v == 0 && matches!(i100, 0 | 20 | 40 | 60 | 80) {
        Few
    } else if op.v != 0 {
        Many
    } else {
        Other
    }
}

/// Icelandic.
fn c_is(op: &PluralOperands) -> PluralCategory {
    let i10 = op.i % 10;
    let i100 = op.i % 100;
    if op.t == 0 && i10 == 1 && i100 != 11 || op.t != 0 {
        One
    } else {
        Other
    }
}

/// Danish.
fn c_da(op: &PluralOperands) -> PluralCategory {
    if n_eq(op, 1) || op.t != 0 && op.i <= 1 {
        One
    } else {
        Other
    }
}

/// Sinhala.
fn c_si(op: &PluralOperands) -> PluralCategory {
    if n_eq(op, 0) || n_eq(op, 1) || op.i == 0 && op.f == 1 {
        One
    } else {
        Other
    }
}

/// Macedonian.
fn c_mk(op: &PluralOperands) -> PluralCategory {
    let i10 = op.i % 10;
    let i100 = op.i % 100;
    let f10 = op.f % 10;
    let f100 = op.f % 100;
    if op.v == 0 && i10 == 1 && i100 != 11 || f10 == 1 && f100 != 11 {
        One
    } else {
        Other
    }
}

/// Filipino, Tagalog, Cebuano.
fn c_filipino(op: &PluralOperands) -> PluralCategory {
    let i10 = op.i % 10;
    let f10 = op.f % 10;
    if op.v == 0 && in_u(op.i, 1, 3)
        || op.v == 0 && !matches!(i10, 4 | 6 | 9)
        || op.v != 0 && !matches!(f10, 4 | 6 | 9)
    {
        One
    } else {
        Other
    }
}

/// Dual-only group: Northern Sami, Inuktitut, Santali, Naga, …
fn c_dual(op: &PluralOperands) -> PluralCategory {
    if n_eq(op, 1) {
        One
    } else if n_eq(op, 2) {
        Two
    } else {
        Other
    }
}

/// Tachelhit.
fn c_shi(op: &PluralOperands) -> PluralCategory {
    if op.i == 0 || n_eq(op, 1) {
        One
    } else if n_in(op, 2, 10) {
        Few
    } else {
        Other
    }
}

/// Central Atlas Tamazight.
fn c_tzm(op: &PluralOperands) -> PluralCategory {
    if op.n >= 0.0 && op.n <= 1.0 || n_in(op, 11, 99) {
        One
    } else {
        Other
    }
}

/// Colognian.
fn c_ksh(op: &PluralOperands) -> PluralCategory {
    if n_eq(op, 0) {
        Zero
    } else if n_eq(op, 1) {
        One
    } else {
        Other
    }
}

/// Langi.
fn c_lag(op: &PluralOperands) -> PluralCategory {
    if n_eq(op, 0) {
        Zero
    } else if op.i <= 1 && !n_eq(op, 0) {
        One
    } else {
        Other
    }
}

// ---------------------------------------------------------------------------
// Ordinal rule groups
// ---------------------------------------------------------------------------

/// English: 1st, 2nd, 3rd, 4th … 11th, 12th, 13th … 21st.
fn o_en(op: &PluralOperands) -> PluralCategory {
    if n_mod_eq(op, 10, 1) && !n_mod_eq(op, 100, 11) {
        One
    } else if n_mod_eq(op, 10, 2) && !n_mod_eq(op, 100, 12) {
        Two
    } else if n_mod_eq(op, 10, 3) && !n_mod_eq(op, 100, 13) {
        Few
    } else {
        Other
    }
}

/// Swedish.
fn o_sv(op: &PluralOperands) -> PluralCategory {
    if (n_mod_eq(op, 10, 1) || n_mod_eq(op, 10, 2)) && !(n_mod_eq(op, 100, 11) || n_mod_eq(op, 100, 12))
    {
        One
    } else {
        Other
    }
}

/// `one: n = 1` — French, Irish, Armenian, Lao, Moldavian, …
fn o_one_n1(op: &PluralOperands) -> PluralCategory {
    if n_eq(op, 1) {
        One
    } else {
        Other
    }
}

/// Italian, Sardinian, Sicilian: 8°, 11°, 80°, 800°.
fn o_it(op: &PluralOperands) -> PluralCategory {
    if n_eq(op, 8) || n_eq(op, 11) || n_eq(op, 80) || n_eq(op, 800) {
        Many
    } else {
        Other
    }
}

/// Catalan.
fn o_ca(op: &PluralOperands) -> PluralCategory {
    if n_eq(op, 1) || n_eq(op, 3) {
        One
    } else if n_eq(op, 2) {
        Two
    } else if n_eq(op, 4) {
        Few
    } else {
        Other
    }
}

/// Marathi.
fn o_mr(op: &PluralOperands) -> PluralCategory {
    if n_eq(op, 1) {
        One
    } else if n_eq(op, 2) || n_eq(op, 3) {
        Two
    } else if n_eq(op, 4) {
        Few
    } else {
        Other
    }
}

/// Hindi, Gujarati.
fn o_hi(op: &PluralOperands) -> PluralCategory {
    if n_eq(op, 1) {
        One
    } else if n_eq(op, 2) || n_eq(op, 3) {
        Two
    } else if n_eq(op, 4) {
        Few
    } else if n_eq(op, 6) {
        Many
    } else {
        Other
    }
}

/// Bengali, Assamese.
fn o_bn(op: &PluralOperands) -> PluralCategory {
    if n_eq(op, 1) || n_eq(op, 5) || n_in(op, 7, 10) {
        One
    } else if n_eq(op, 2) || n_eq(op, 3) {
        Two
    } else if n_eq(op, 4) {
        Few
    } else if n_eq(op, 6) {
        Many
    } else {
        Other
    }
}

/// Ukrainian.
fn o_uk(op: &PluralOperands) -> PluralCategory {
    if n_mod_eq(op, 10, 3) && !n_mod_eq(op, 100, 13) {
        Few
    } else {
        Other
    }
}

/// Belarusian.
fn o_be(op: &PluralOperands) -> PluralCategory {
    if (n_mod_eq(op, 10, 2) || n_mod_eq(op, 10, 3)) && !(n_mod_eq(op, 100, 12) || n_mod_eq(op, 100, 13))
    {
        Few
    } else {
        Other
    }
}

/// Kazakh.
fn o_kk(op: &PluralOperands) -> PluralCategory {
    if n_mod_eq(op, 10, 6) || n_mod_eq(op, 10, 9) || n_mod_eq(op, 10, 0) && !n_eq(op, 0) {
        Many
    } else {
        Other
    }
}

/// Albanian.
fn o_sq(op: &PluralOperands) -> PluralCategory {
    if n_eq(op, 1) {
        One
    } else if n_mod_eq(op, 10, 4) && !n_mod_eq(op, 100, 14) {
        Many
    } else {
        Other
    }
}

/// Welsh.
fn o_cy(op: &PluralOperands) -> PluralCategory {
    if n_eq(op, 0) || n_in(op, 7, 9) {
        Zero
    } else if n_eq(op, 1) {
        One
    } else if n_eq(op, 2) {
        Two
    } else if n_eq(op, 3) || n_eq(op, 4) {
        Few
    } else if n_eq(op, 5) || n_eq(op, 6) {
        Many
    } else {
        Other
    }
}

/// Azerbaijani.
fn o_az(op: &PluralOperands) -> PluralCategory {
    let i10 = op.i % 10;
    let i100 = op.i % 100;
    let i1000 = op.i % 1000;
    if matches!(i10, 1 | 2 | 5 | 7 | 8) || matches!(i100, 20 | 50 | 70 | 80) {
        One
    } else if matches!(i10, 3 | 4) || matches!(i1000, 100 | 200 | 300 | 400 | 500 | 600 | 700 | 800 | 900)
    {
        Few
    } else if op.i == 0 || i10 == 6 || matches!(i100, 40 | 60 | 90) {
        Many
    } else {
        Other
    }
}

/// Georgian.
fn o_ka(op: &PluralOperands) -> PluralCategory {
    let i100 = op.i % 100;
    if op.i == 1 {
        One
    } else if op.i == 0 || in_u(i100, 2, 20) || matches!(i100, 40 | 60 | 80) {
        Many
    } else {
        Other
    }
}

/// Hungarian.
fn o_hu(op: &PluralOperands) -> PluralCategory {
    if n_eq(op, 1) || n_eq(op, 5) {
        One
    } else {
        Other
    }
}

/// Nepali.
fn o_ne(op: &PluralOperands) -> PluralCategory {
    if n_in(op, 1, 4) {
        One
    } else {
        Other
    }
}

/// Odia.
fn o_or(op: &PluralOperands) -> PluralCategory {
    if n_eq(op, 1) || n_eq(op, 5) || n_in(op, 7, 9) {
        One
    } else if n_eq(op, 2) || n_eq(op, 3) {
        Two
    } else if n_eq(op, 4) {
        Few
    } else if n_eq(op, 6) {
        Many
    } else {
        Other
    }
}

/// Turkmen.
fn o_tk(op: &PluralOperands) -> PluralCategory {
    if n_mod_eq(op, 10, 6) || n_mod_eq(op, 10, 9) || n_eq(op, 10) {
        Few
    } else {
        Other
    }
}

/// Scottish Gaelic.
fn o_gd(op: &PluralOperands) -> PluralCategory {
    if n_eq(op, 1) || n_eq(op, 11) {
        One
    } else if n_eq(op, 2) || n_eq(op, 12) {
        Two
    } else if n_eq(op, 3) || n_eq(op, 13) {
        Few
    } else {
        Other
    }
}

/// Macedonian.
fn o_mk(op: &PluralOperands) -> PluralCategory {
    let i10 = op.i % 10;
    let i100 = op.i % 100;
    if i10 == 1 && i100 != 11 {
        One
    } else if i10 == 2 && i100 != 12 {
        Two
    } else if matches!(i10, 7 | 8) && !matches!(i100, 17 | 18) {
        Many
    } else {
        Other
    }
}

// ---------------------------------------------------------------------------
// Dispatch tables
// ---------------------------------------------------------------------------

/// Cardinal rule for a normalized tag (lowercase, `-` separators).
pub(crate) fn cardinal(tag: &str) -> Option<RuleFn> {
    Some(match tag {
        // Regional overrides checked before the primary-subtag pass.
        "pt-pt" => c_germanic,

        "bm" | "bo" | "dz" | "hnj" | "id" | "ig" | "ii" | "in" | "ja" | "jbo" | "jv" | "jw"
        | "kde" | "kea" | "km" | "ko" | "lkt" | "lo" | "ms" | "my" | "nqo" | "osa" | "sah"
        | "ses" | "sg" | "su" | "th" | "to" | "tpi" | "vi" | "wo" | "yo" | "yue" | "zh" => c_other,

        "ast" | "ca" | "de" | "en" | "et" | "eu" | "fi" | "fy" | "gl" | "ia" | "io" | "it"
        | "ji" | "lij" | "nl" | "sc" | "scn" | "sv" | "sw" | "ur" | "yi" => c_germanic,

        "af" | "an" | "asa" | "az" | "bal" | "bem" | "bez" | "bg" | "brx" | "ce" | "cgg"
        | "chr" | "ckb" | "dv" | "ee" | "el" | "eo" | "es" | "fo" | "fur" | "gsw" | "ha"
        | "haw" | "hu" | "jgo" | "jmc" | "ka" | "kaj" | "kcg" | "kk" | "kkj" | "kl" | "ks"
        | "ksb" | "ku" | "ky" | "lb" | "lg" | "mas" | "mgo" | "ml" | "mn" | "mr" | "nah"
        | "nb" | "nd" | "ne" | "nn" | "nnh" | "no" | "nr" | "ny" | "nyn" | "om" | "or" | "os"
        | "pap" | "ps" | "rm" | "rof" | "rwk" | "saq" | "sd" | "sdh" | "seh" | "sn" | "so"
        | "sq" | "ss" | "ssy" | "st" | "syr" | "ta" | "te" | "teo" | "tig" | "tk" | "tn"
        | "tr" | "ts" | "ug" | "uz" | "ve" | "vo" | "vun" | "wae" | "xh" | "xog" => c_one_n1,

        "ff" | "fr" | "hy" | "kab" | "pt" => c_romance_i01,

        "am" | "as" | "bn" | "doi" | "fa" | "gu" | "hi" | "kn" | "pcm" | "zu" => c_indic,

        "ak" | "bho" | "guw" | "ln" | "mg" | "nso" | "pa" | "ti" | "wa" => c_zero_through_one,

        "ru" | "uk" => c_east_slavic,
        "be" => c_be,
        "pl" => c_pl,
        "cs" | "sk" => c_czech,
        "sl" => c_sl,
        "bs" | "hr" | "sh" | "sr" => c_south_slavic,
        "lt" => c_lt,
        "lv" | "prg" => c_lv,
        "mo" | "ro" => c_ro,
        "ar" | "ars" => c_ar,
        "he" | "iw" => c_he,
        "mt" => c_mt,
        "ga" => c_ga,
        "gd" => c_gd,
        "cy" => c_cy,
        "br" => c_br,
        "gv" => c_gv,
        "is" => c_is,
        "da" => c_da,
        "si" => c_si,
        "mk" => c_mk,
        "ceb" | "fil" | "tl" => c_filipino,
        "iu" | "naq" | "sat" | "se" | "sma" | "smi" | "smj" | "smn" | "sms" => c_dual,
        "shi" => c_shi,
        "tzm" => c_tzm,
        "ksh" => c_ksh,
        "lag" => c_lag,

        _ => return None,
    })
}

/// Ordinal rule for a normalized tag. Absent tags are `other`-everywhere.
pub(crate) fn ordinal(tag: &str) -> Option<RuleFn> {
    Some(match tag {
        "en" => o_en,
        "sv" => o_sv,
        "fil" | "fr" | "ga" | "hy" | "lo" | "mo" | "ms" | "ro" | "tl" | "vi" => o_one_n1,
        "it" | "sc" | "scn" => o_it,
        "ca" => o_ca,
        "mr" => o_mr,
        "gu" | "hi" => o_hi,
        "as" | "bn" => o_bn,
        "uk" => o_uk,
        "be" => o_be,
        "kk" => o_kk,
        "sq" => o_sq,
        "cy" => o_cy,
        "az" => o_az,
        "ka" => o_ka,
        "hu" => o_hu,
        "ne" => o_ne,
        "or" => o_or,
        "tk" => o_tk,
        "gd" => o_gd,
        "mk" => o_mk,
        _ => return None,
    })
}
