use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Write};

use emoji_engine::property::{self, property_table};
use emoji_parse::{emoji_data_version, EmojiProperty, UcdFileByCodepoint};
use log::{debug, info, warn};

use crate::args::ArgMatches;
use crate::error::Result;
use crate::util;

pub fn command(args: ArgMatches<'_>) -> Result<()> {
    let dir = args.ucd_dir()?;
    let rows: Vec<EmojiProperty> = emoji_parse::parse(&dir)?;
    let by_name = property_sets(&rows);
    debug!("parsed {} rows naming {} properties", rows.len(), by_name.len());

    if args.is_present("list-properties") {
        return write_names(&mut io::stdout(), by_name.keys());
    }
    let filter = args.filter(|name| canonical_name(&by_name, name))?;
    let selected: BTreeMap<&str, &BTreeSet<u32>> = by_name
        .iter()
        .filter(|&(name, _)| filter.contains(name))
        .map(|(name, set)| (name.as_str(), set))
        .collect();
    if selected.is_empty() {
        warn!("no emoji properties selected, emitting empty table");
    }

    let version = emoji_data_version(&dir)?;
    debug!("emoji data version {}.{}.{}", version.0, version.1, version.2);
    for (name, set) in &selected {
        if differs_from_builtin(name, set) == Some(true) {
            let v = property::UNICODE_VERSION;
            info!(
                "{} differs from the built-in table (emoji data {}.{}.{})",
                name, v.0, v.1, v.2
            );
        }
    }
    let mut wtr = args.writer("emoji_properties")?;
    wtr.unicode_version(version)?;
    wtr.names(selected.keys())?;
    for (name, set) in selected {
        wtr.ranges(name, set)?;
    }
    Ok(())
}

fn write_names<W: Write, I: IntoIterator<Item = T>, T: AsRef<str>>(
    wtr: &mut W,
    names: I,
) -> Result<()> {
    for name in names {
        writeln!(wtr, "{}", name.as_ref())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Compare a parsed property with the table compiled into the engine.
/// Returns `None` when the engine carries no table for the property.
fn differs_from_builtin(name: &str, set: &BTreeSet<u32>) -> Option<bool> {
    let builtin = property_table(name)?;
    Some(util::to_ranges(set.iter().cloned()) != builtin)
}

/// Group the codepoints of every row by property name.
fn property_sets(rows: &[EmojiProperty]) -> BTreeMap<String, BTreeSet<u32>> {
    let mut by_name: BTreeMap<String, BTreeSet<u32>> = BTreeMap::new();
    for row in rows {
        by_name
            .entry(row.property.clone())
            .or_insert_with(BTreeSet::new)
            .extend(row.codepoints().map(|cp| cp.value()));
    }
    by_name
}

/// Resolve a user supplied property name to the name used in the data file.
/// Case, `_`, `-` and spaces are ignored.
fn canonical_name(
    by_name: &BTreeMap<String, BTreeSet<u32>>,
    given: &str,
) -> Result<String> {
    let wanted = normalize(given);
    match by_name.keys().find(|name| normalize(name) == wanted) {
        Some(name) => Ok(name.clone()),
        None => err!("unrecognized emoji property: {}", given),
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|&c| c != '_' && c != '-' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use emoji_parse::EmojiProperty;

    use std::collections::BTreeSet;
    use std::io::{self, Write};

    use emoji_engine::property::property_table;

    use super::{
        canonical_name, differs_from_builtin, property_sets, write_names,
    };

    fn rows() -> Vec<EmojiProperty> {
        vec![
            "0023          ; Emoji",
            "0030..0039    ; Emoji",
            "1F3FB..1F3FF  ; Emoji_Modifier",
            "1F3FB..1F3FF  ; Emoji",
            "261D          ; Emoji_Modifier_Base",
        ]
        .into_iter()
        .map(|line| line.parse().unwrap())
        .collect()
    }

    #[test]
    fn groups_by_property() {
        let sets = property_sets(&rows());
        let names: Vec<&str> = sets.keys().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["Emoji", "Emoji_Modifier", "Emoji_Modifier_Base"]);
        assert_eq!(sets["Emoji"].len(), 1 + 10 + 5);
        assert!(sets["Emoji"].contains(&0x1F3FD));
        assert_eq!(sets["Emoji_Modifier_Base"].len(), 1);
    }

    #[test]
    fn canonical_names() {
        let sets = property_sets(&rows());
        assert_eq!(
            canonical_name(&sets, "emoji-modifier-base").unwrap(),
            "Emoji_Modifier_Base"
        );
        assert_eq!(canonical_name(&sets, "EMOJI").unwrap(), "Emoji");
        assert!(canonical_name(&sets, "Extended_Pictographic").is_err());
    }

    #[test]
    fn compares_against_builtin_tables() {
        let modifiers: BTreeSet<u32> = property_table("Emoji_Modifier")
            .unwrap()
            .iter()
            .flat_map(|&(start, end)| start..=end)
            .collect();
        assert_eq!(differs_from_builtin("Emoji_Modifier", &modifiers), Some(false));

        let mut changed = modifiers.clone();
        changed.remove(&0x1F3FF);
        assert_eq!(differs_from_builtin("Emoji_Modifier", &changed), Some(true));

        assert_eq!(differs_from_builtin("Extended_Pictographic", &modifiers), None);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn list_properties() {
        let sets = property_sets(&rows());
        let mut out = vec![];
        write_names(&mut out, sets.keys()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Emoji\nEmoji_Modifier\nEmoji_Modifier_Base\n"
        );

        let err = write_names(&mut ClosedPipe, sets.keys()).unwrap_err();
        assert!(err.is_broken_pipe());
    }
}
