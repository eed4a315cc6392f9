use std::io::{self, Write};

use emoji_engine::{
    contains_only_emoji, emoji_components, emoji_skin_tone, emojis,
    is_single_emoji, normalizing_skin_tone, removing_emojis,
    stripping_emojis, InputFilter, SkinTone,
};
use log::debug;

use crate::args::ArgMatches;
use crate::error::Result;

pub fn classify(args: ArgMatches<'_>) -> Result<()> {
    let stdout = io::stdout();
    let mut wtr = io::BufWriter::new(stdout.lock());
    write_classified(&mut wtr, args.inputs())
}

pub fn filter(args: ArgMatches<'_>) -> Result<()> {
    let config = args.filter_config()?;
    debug!("input filter configuration: {:?}", config);
    let stdout = io::stdout();
    let mut wtr = io::BufWriter::new(stdout.lock());
    write_filtered(&mut wtr, args.inputs(), &InputFilter::new(config))
}

pub fn strip(args: ArgMatches<'_>) -> Result<()> {
    let stdout = io::stdout();
    let mut wtr = io::BufWriter::new(stdout.lock());
    write_stripped(&mut wtr, args.inputs(), args.is_present("collapse"))
}

pub fn normalize(args: ArgMatches<'_>) -> Result<()> {
    let tone = match args.skin_tone()? {
        Some(tone) => tone,
        None => return err!("missing --skin-tone"),
    };
    let stdout = io::stdout();
    let mut wtr = io::BufWriter::new(stdout.lock());
    write_normalized(&mut wtr, args.inputs(), tone)
}

pub fn components(args: ArgMatches<'_>) -> Result<()> {
    let stdout = io::stdout();
    let mut wtr = io::BufWriter::new(stdout.lock());
    write_components(&mut wtr, args.inputs())
}

/// Write one line per input, produced by `line`. Returning `None` from
/// `line` drops the input.
fn write_lines<W, I, F>(wtr: &mut W, inputs: I, mut line: F) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = io::Result<String>>,
    F: FnMut(&str) -> Option<String>,
{
    for result in inputs {
        let text = result?;
        if let Some(out) = line(&text) {
            writeln!(wtr, "{}", out)?;
        }
    }
    wtr.flush()?;
    Ok(())
}

fn write_classified<W, I>(wtr: &mut W, inputs: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = io::Result<String>>,
{
    write_lines(wtr, inputs, |text| Some(report(text)))
}

fn write_filtered<W, I>(
    wtr: &mut W,
    inputs: I,
    filter: &InputFilter,
) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = io::Result<String>>,
{
    let (mut accepted, mut rejected) = (0u64, 0u64);
    write_lines(wtr, inputs, |insertion| match filter.accept(insertion) {
        Some(forwarded) => {
            accepted += 1;
            Some(forwarded)
        }
        None => {
            rejected += 1;
            None
        }
    })?;
    debug!("accepted {} insertions, rejected {}", accepted, rejected);
    Ok(())
}

fn write_stripped<W, I>(wtr: &mut W, inputs: I, collapse: bool) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = io::Result<String>>,
{
    write_lines(wtr, inputs, |text| {
        if collapse {
            Some(stripping_emojis(text))
        } else {
            Some(removing_emojis(text))
        }
    })
}

fn write_normalized<W, I>(wtr: &mut W, inputs: I, tone: SkinTone) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = io::Result<String>>,
{
    write_lines(wtr, inputs, |text| Some(normalizing_skin_tone(text, tone)))
}

fn write_components<W, I>(wtr: &mut W, inputs: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = io::Result<String>>,
{
    write_lines(wtr, inputs, |text| Some(emoji_components(text).join(" ")))
}

/// One tab separated line describing how `text` is classified.
fn report(text: &str) -> String {
    let found = emojis(text);
    let tone = emoji_skin_tone(text).map(SkinTone::name).unwrap_or("-");
    let components = match emoji_components(text) {
        ref c if c.is_empty() => "-".to_string(),
        c => c.join("+"),
    };
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        text,
        contains_only_emoji(text),
        is_single_emoji(text),
        found.len(),
        found.join(" "),
        tone,
        components,
    )
}

#[cfg(test)]
mod tests {
    use std::io;

    use emoji_engine::{FilterConfig, InputFilter, SkinTone};

    use super::*;

    fn lines(texts: &[&str]) -> Vec<io::Result<String>> {
        texts.iter().map(|t| Ok(t.to_string())).collect()
    }

    fn output<F>(run: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> crate::error::Result<()>,
    {
        let mut out = vec![];
        run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn filter_strict_drops_rejected_insertions() {
        let filter = InputFilter::new(FilterConfig::new());
        let inputs = lines(&["a", "😊", "", "😊😊", "👨\u{200D}👩\u{200D}👧", "1"]);
        let out = output(|w| write_filtered(w, inputs, &filter));
        assert_eq!(out, "😊\n👨\u{200D}👩\u{200D}👧\n");
    }

    #[test]
    fn filter_lenient_forwards_everything_but_deletes() {
        let filter = InputFilter::new(FilterConfig::new().emoji_only(false));
        let inputs = lines(&["a", "", "hi 😊"]);
        let out = output(|w| write_filtered(w, inputs, &filter));
        assert_eq!(out, "a\nhi 😊\n");
    }

    #[test]
    fn filter_without_skin_tone_keeps_tones() {
        let filter = InputFilter::new(FilterConfig::new());
        let inputs = lines(&["👋🏽", "👋"]);
        let out = output(|w| write_filtered(w, inputs, &filter));
        assert_eq!(out, "👋🏽\n👋\n");
    }

    #[test]
    fn filter_with_skin_tone_normalizes() {
        let config =
            FilterConfig::new().normalize_skin_tone(Some(SkinTone::Dark));
        let filter = InputFilter::new(config);
        let inputs = lines(&["👋", "👋🏻", "a"]);
        let out = output(|w| write_filtered(w, inputs, &filter));
        assert_eq!(out, "👋🏿\n👋🏿\n");
    }

    #[test]
    fn filter_stops_on_read_error() {
        let filter = InputFilter::new(FilterConfig::new());
        let inputs = vec![
            Ok("😊".to_string()),
            Err(io::Error::new(io::ErrorKind::InvalidData, "not UTF-8")),
            Ok("🔥".to_string()),
        ];
        let mut out = vec![];
        assert!(write_filtered(&mut out, inputs, &filter).is_err());
        assert_eq!(out, "😊\n".as_bytes());
    }

    #[test]
    fn strip_keeps_whitespace_unless_collapsing() {
        let inputs = || lines(&["Hello 😊 World 🔥", "😊😊", "  a  😊  b  "]);
        let out = output(|w| write_stripped(w, inputs(), false));
        assert_eq!(out, "Hello  World \n\n  a    b  \n");
        let out = output(|w| write_stripped(w, inputs(), true));
        assert_eq!(out, "Hello World\n\na b\n");
    }

    #[test]
    fn normalize_rewrites_and_strips() {
        let inputs = || lines(&["Hi 👋🏻!", "👍", "no emoji"]);
        let out = output(|w| write_normalized(w, inputs(), SkinTone::Medium));
        assert_eq!(out, "Hi 👋🏽!\n👍🏽\nno emoji\n");
        let out = output(|w| write_normalized(w, inputs(), SkinTone::Strip));
        assert_eq!(out, "Hi 👋!\n👍\nno emoji\n");
    }

    #[test]
    fn components_per_line() {
        let inputs = lines(&["👨\u{200D}👩\u{200D}👧", "😊", "ab", "😊😊"]);
        let out = output(|w| write_components(w, inputs));
        assert_eq!(out, "👨 👩 👧\n😊\n\n\n");
    }

    #[test]
    fn classify_one_report_per_line() {
        let out = output(|w| write_classified(w, lines(&["😊", "x"])));
        assert_eq!(
            out,
            "😊\ttrue\ttrue\t1\t😊\t-\t😊\nx\tfalse\tfalse\t0\t\t-\t-\n"
        );
    }

    #[test]
    fn report_columns() {
        assert_eq!(
            report("Hello 😊 World 🔥"),
            "Hello 😊 World 🔥\tfalse\tfalse\t2\t😊 🔥\t-\t-"
        );
        assert_eq!(report("👋🏽"), "👋🏽\ttrue\ttrue\t1\t👋🏽\tmedium\t👋🏽");
        assert_eq!(
            report("👨\u{200D}👩\u{200D}👧"),
            "👨\u{200D}👩\u{200D}👧\ttrue\ttrue\t1\t👨\u{200D}👩\u{200D}👧\t-\t👨+👩+👧"
        );
        assert_eq!(report(""), "\tfalse\tfalse\t0\t\t-\t-");
    }
}
