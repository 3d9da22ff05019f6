//! End-to-end formatting scenarios through the public facade.

use std::sync::Arc;

use chrono::{TimeZone as _, Utc};
use icumsg::{Args, FormatOptions, MessageFormat, ValueKind};

fn mf() -> MessageFormat {
    MessageFormat::new(FormatOptions::new().locale("en"))
}

#[test]
fn greeting() {
    let out = mf()
        .format("Hello, {name}!", &Args::new().set("name", "Jeff"))
        .unwrap();
    assert_eq!(out, "Hello, Jeff!");
}

#[test]
fn plural_with_exact_match() {
    let mf = mf();
    let pattern = "You have {n, plural, =0 {no items} one {one item} other {# items}}.";
    let cases = [
        (0, "You have no items."),
        (1, "You have one item."),
        (42, "You have 42 items."),
    ];
    for (n, expected) in cases {
        assert_eq!(mf.format(pattern, &Args::new().set("n", n)).unwrap(), expected);
    }
}

#[test]
fn select_with_fallback() {
    let mf = mf();
    let pattern = "{g, select, male{He} female{She} other{They}} likes it.";
    assert_eq!(
        mf.format(pattern, &Args::new().set("g", "female")).unwrap(),
        "She likes it."
    );
    assert_eq!(
        mf.format(pattern, &Args::new().set("g", "xx")).unwrap(),
        "They likes it."
    );
}

#[test]
fn quoted_placeholder_is_inert() {
    let out = mf()
        .format("Arg: '{escaped}' and {real}", &Args::new().set("real", "X"))
        .unwrap();
    assert_eq!(out, "Arg: {escaped} and X");
}

#[test]
fn smart_apostrophes() {
    let out = mf().format("It's '{a}' test: ''", &Args::new()).unwrap();
    assert_eq!(out, "It's {a} test: '");
}

#[test]
fn offset_applies_to_hash_not_match() {
    let mf = mf();
    let pattern = "{n, plural, offset:1 one{#st} other{# more}}";
    assert_eq!(mf.format(pattern, &Args::new().set("n", 1)).unwrap(), "0st");
    assert_eq!(mf.format(pattern, &Args::new().set("n", 3)).unwrap(), "2 more");
}

#[test]
fn exact_match_checks_unoffset_value() {
    // =3 must win for n=3 even though the offset shifts # to 1.
    let out = mf()
        .format(
            "{n, plural, offset:2 =3 {exactly three (#)} other {# left}}",
            &Args::new().set("n", 3),
        )
        .unwrap();
    assert_eq!(out, "exactly three (1)");
}

#[test]
fn hash_propagates_into_nested_select() {
    let pattern = "{n, plural, other{{g, select, some{# of them} other{# total}}}}";
    let out = mf()
        .format(pattern, &Args::new().set("n", 7).set("g", "some"))
        .unwrap();
    assert_eq!(out, "7 of them");
}

#[test]
fn nested_plural_installs_its_own_hash() {
    let pattern =
        "{outer, plural, other{# boxes with {inner, plural, one{# sticker} other{# stickers}} each}}";
    let out = mf()
        .format(pattern, &Args::new().set("outer", 3).set("inner", 1))
        .unwrap();
    assert_eq!(out, "3 boxes with 1 sticker each");
}

#[test]
fn whitespace_tolerance_between_structural_tokens() {
    let mf = mf();
    let compact = "{n,plural,offset:1 one{#st} other{# more}}";
    let airy = "{ n , plural , offset : 1\n  one {#st}\n  other {# more}\n}";
    for n in [1, 5] {
        let args = Args::new().set("n", n);
        assert_eq!(
            mf.format(compact, &args).unwrap(),
            mf.format(airy, &args).unwrap()
        );
    }
}

#[test]
fn russian_plurals_end_to_end() {
    let mf = mf();
    let pattern = "{n, plural, one{# файл} few{# файла} many{# файлов} other{# файла}}";
    let cases = [(1, "1 файл"), (3, "3 файла"), (5, "5 файлов"), (21, "21 файл")];
    for (n, expected) in cases {
        assert_eq!(
            mf.format_localized(pattern, &Args::new().set("n", n), "ru").unwrap(),
            expected
        );
    }
}

#[test]
fn english_ordinals_end_to_end() {
    let mf = mf();
    let pattern = "{n, selectordinal, one{#st} two{#nd} few{#rd} other{#th}}";
    let cases = [(1, "1st"), (2, "2nd"), (3, "3rd"), (4, "4th"), (11, "11th"), (22, "22nd")];
    for (n, expected) in cases {
        assert_eq!(mf.format(pattern, &Args::new().set("n", n)).unwrap(), expected);
    }
}

#[test]
fn number_styles_end_to_end() {
    let mf = mf();
    let args = Args::new().set("n", 1234.56);
    assert_eq!(mf.format("{n, number}", &args).unwrap(), "1,234.56");
    assert_eq!(mf.format("{n, number, integer}", &args).unwrap(), "1,235");
    assert_eq!(mf.format("{n, number, currency}", &args).unwrap(), "$1,234.56");
    assert_eq!(
        mf.format("{share, number, percent}", &Args::new().set("share", 0.37)).unwrap(),
        "37%"
    );
}

#[test]
fn date_and_time_end_to_end() {
    let mf = mf();
    let ts = Utc.with_ymd_and_hms(2024, 7, 14, 15, 5, 0).unwrap();
    let args = Args::new().set("when", ts);
    assert_eq!(
        mf.format("Due {when, date} at {when, time}.", &args).unwrap(),
        "Due Jul 14, 2024 at 3:05 PM."
    );
    assert_eq!(
        mf.format("{when, date, short}", &args).unwrap(),
        "7/14/24"
    );
    assert_eq!(
        mf.format("{when, date, full}", &args).unwrap(),
        "Sunday, July 14, 2024"
    );
}

#[test]
fn unrecognized_style_does_not_error() {
    let mf = mf();
    let ts = Utc.with_ymd_and_hms(2024, 7, 14, 15, 5, 0).unwrap();
    assert!(mf
        .format("{when, date, %Y/%m}", &Args::new().set("when", ts))
        .is_ok());
    assert!(mf
        .format("{n, number, ::compact}", &Args::new().set("n", 5))
        .is_ok());
}

#[test]
fn default_rendering_by_value_type() {
    let mf = mf();
    let ts = Utc.with_ymd_and_hms(2024, 7, 14, 0, 0, 0).unwrap();
    let out = mf
        .format(
            "{s} / {n} / {b} / {d}",
            &Args::new()
                .set("s", "text")
                .set("n", 1234567)
                .set("b", true)
                .set("d", ts),
        )
        .unwrap();
    assert_eq!(out, "text / 1,234,567 / true / Jul 14, 2024");
}

#[test]
fn select_keys_are_case_sensitive() {
    let out = mf()
        .format(
            "{g, select, Male{Mr} other{Mx}}",
            &Args::new().set("g", "male"),
        )
        .unwrap();
    assert_eq!(out, "Mx");
}

#[test]
fn numeric_string_arguments_coerce() {
    let out = mf()
        .format(
            "{n, plural, one{# item} other{# items}}",
            &Args::new().set("n", "1"),
        )
        .unwrap();
    assert_eq!(out, "1 item");
}

#[test]
fn fractional_plurals_use_operands() {
    // English "one" requires an integer: 1.5 is other, and # keeps the
    // fraction.
    let out = mf()
        .format(
            "{n, plural, one{# item} other{# items}}",
            &Args::new().set("n", 1.5),
        )
        .unwrap();
    assert_eq!(out, "1.5 items");
}

#[test]
fn custom_value_formatter_intercepts() {
    let mf = MessageFormat::new(
        FormatOptions::new()
            .locale("en")
            .custom_value_formatter(Arc::new(|value, kind, _style, _locale| {
                (kind == ValueKind::Number).then(|| format!("NUM({})", value.as_key()))
            })),
    );
    // Styled, unstyled and `#` renditions all route through the override.
    let out = mf
        .format(
            "{n, number, integer} = {n} = {n, plural, other{#}}",
            &Args::new().set("n", 5),
        )
        .unwrap();
    assert_eq!(out, "NUM(5) = NUM(5) = NUM(5)");
}

#[test]
fn readme_style_composite_message() {
    let mf = MessageFormat::new(FormatOptions::new().locale("en").use_cache(true));
    let pattern = "{host} {guests, plural, offset:1 =0 {does not give a party} \
                   =1 {invites {guest} to their party} \
                   =2 {invites {guest} and one other person to their party} \
                   other {invites {guest} and # other people to their party}}.";
    let args = Args::new().set("host", "Ada").set("guests", 4).set("guest", "Max");
    assert_eq!(
        mf.format(pattern, &args).unwrap(),
        "Ada invites Max and 3 other people to their party."
    );
    let args = Args::new().set("host", "Ada").set("guests", 0).set("guest", "Max");
    assert_eq!(mf.format(pattern, &args).unwrap(), "Ada does not give a party.");
}

#[cfg(feature = "serde")]
#[test]
fn reflected_struct_arguments() {
    #[derive(serde::Serialize)]
    struct Inbox {
        unread: u32,
        owner: String,
    }

    let args = Args::from_serialize(&Inbox { unread: 3, owner: "Sam".into() }).unwrap();
    let out = mf()
        .format(
            "{owner} has {unread, plural, =0 {no mail} one {# message} other {# messages}}",
            &args,
        )
        .unwrap();
    assert_eq!(out, "Sam has 3 messages");
}
