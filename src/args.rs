use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::io::{self, BufRead};
use std::ops;

use emoji_engine::{FilterConfig, SkinTone};

use crate::error::Result;
use crate::util;
use crate::writer::{Writer, WriterBuilder};

/// A thin wrapper around clap's `ArgMatches` with typed accessors for the
/// flags shared between subcommands.
#[derive(Clone, Copy)]
pub struct ArgMatches<'a>(&'a clap::ArgMatches<'a>);

impl<'a> ops::Deref for ArgMatches<'a> {
    type Target = clap::ArgMatches<'a>;
    fn deref(&self) -> &clap::ArgMatches<'a> {
        &self.0
    }
}

impl<'a> ArgMatches<'a> {
    pub fn new(matches: &'a clap::ArgMatches<'a>) -> ArgMatches<'a> {
        ArgMatches(matches)
    }

    pub fn ucd_dir(&self) -> Result<&'a OsStr> {
        match self.0.value_of_os("ucd-dir") {
            Some(x) => Ok(x),
            None => err!("missing UCD directory"),
        }
    }

    /// Build a table writer for stdout from the output flags.
    pub fn writer(&self, name: &str) -> Result<Writer> {
        let mut builder = WriterBuilder::new(name);
        builder
            .columns(79)
            .char_literals(self.is_present("chars"))
            .trie_set(self.is_present("trie-set"))
            .command_line(util::command_line());
        Ok(builder.from_stdout())
    }

    /// Build the set of names selected by `--include` and `--exclude`.
    ///
    /// Every name given on the command line is passed through `canonical`,
    /// which may reject it.
    pub fn filter<F: FnMut(&str) -> Result<String>>(
        &self,
        mut canonical: F,
    ) -> Result<Filter> {
        let mut include = None;
        if let Some(list) = self.value_of("include") {
            let mut names = BTreeSet::new();
            for name in util::split_names(list) {
                names.insert(canonical(&name)?);
            }
            include = Some(names);
        }
        let mut exclude = BTreeSet::new();
        if let Some(list) = self.value_of("exclude") {
            for name in util::split_names(list) {
                exclude.insert(canonical(&name)?);
            }
        }
        Ok(Filter { include, exclude })
    }

    /// The tone given to `--skin-tone`, if any.
    pub fn skin_tone(&self) -> Result<Option<SkinTone>> {
        match self.value_of("skin-tone") {
            None => Ok(None),
            Some(name) => Ok(Some(name.parse()?)),
        }
    }

    /// The input filter configuration described by `--lenient` and
    /// `--skin-tone`.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        Ok(FilterConfig::new()
            .emoji_only(!self.is_present("lenient"))
            .normalize_skin_tone(self.skin_tone()?))
    }

    /// The texts to process: the positional arguments, or each line of
    /// stdin when there are none.
    pub fn inputs(&self) -> Box<dyn Iterator<Item = io::Result<String>> + 'a> {
        match self.0.values_of("text") {
            Some(values) => {
                Box::new(values.map(|v| -> io::Result<String> {
                    Ok(v.to_string())
                }))
            }
            None => Box::new(io::BufReader::new(io::stdin()).lines()),
        }
    }
}

/// A set of names to keep, built from `--include` and `--exclude`.
#[derive(Clone, Debug)]
pub struct Filter {
    include: Option<BTreeSet<String>>,
    exclude: BTreeSet<String>,
}

impl Filter {
    /// Returns true if and only if the given (canonical) name is selected.
    pub fn contains(&self, name: &str) -> bool {
        let included = match self.include {
            None => true,
            Some(ref names) => names.contains(name),
        };
        included && !self.exclude.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use emoji_engine::SkinTone;

    use super::ArgMatches;
    use crate::app::app;

    fn canonical(name: &str) -> crate::error::Result<String> {
        Ok(name.to_ascii_lowercase())
    }

    #[test]
    fn include_and_exclude() {
        let matches = app()
            .get_matches_from_safe(vec![
                "emoji-kit",
                "emoji-properties",
                "/ucd",
                "--include",
                "Emoji,Emoji_Modifier",
                "--exclude",
                "EMOJI_MODIFIER",
            ])
            .unwrap();
        let sub = matches.subcommand_matches("emoji-properties").unwrap();
        let filter = ArgMatches::new(sub).filter(canonical).unwrap();
        assert!(filter.contains("emoji"));
        assert!(!filter.contains("emoji_modifier"));
        assert!(!filter.contains("emoji_presentation"));
    }

    #[test]
    fn no_include_means_everything() {
        let matches = app()
            .get_matches_from_safe(vec!["emoji-kit", "emoji-properties", "/ucd"])
            .unwrap();
        let sub = matches.subcommand_matches("emoji-properties").unwrap();
        let filter = ArgMatches::new(sub).filter(canonical).unwrap();
        assert!(filter.contains("anything"));
    }

    #[test]
    fn filter_config_from_flags() {
        let matches = app()
            .get_matches_from_safe(vec![
                "emoji-kit",
                "filter",
                "--lenient",
                "--skin-tone",
                "dark",
            ])
            .unwrap();
        let sub = matches.subcommand_matches("filter").unwrap();
        let config = ArgMatches::new(sub).filter_config().unwrap();
        assert!(!config.emoji_only);
        assert_eq!(config.normalize_skin_tone, Some(SkinTone::Dark));
    }

    #[test]
    fn inputs_from_arguments() {
        let matches = app()
            .get_matches_from_safe(vec!["emoji-kit", "strip", "a 😊", "b"])
            .unwrap();
        let sub = matches.subcommand_matches("strip").unwrap();
        let inputs: Vec<String> = ArgMatches::new(sub)
            .inputs()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(inputs, vec!["a 😊".to_string(), "b".to_string()]);
    }
}
