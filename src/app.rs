use clap::{App, AppSettings, Arg, SubCommand};

const TEMPLATE: &'static str = "\
{bin} {version}
{about}

USAGE:
    {usage}

SUBCOMMANDS:
{subcommands}

OPTIONS:
{unified}";

const TEMPLATE_SUB: &'static str = "\
{before-help}
USAGE:
    {usage}

ARGS:
{positionals}

OPTIONS:
{unified}";

const ABOUT: &'static str = "
emoji-kit classifies, extracts and normalizes emoji in Unicode text, and
generates the emoji property tables that the classification is built on.

The property tables are sorted sequences of codepoint ranges derived from
Unicode's emoji-data.txt, searched with binary search. All text commands work
on extended grapheme clusters, so a flag, a keycap or a family of people joined
by zero width joiners is treated as a single emoji.

Text commands read their input from the positional arguments, or from stdin
(one input per line) when no arguments are given.";

const ABOUT_EMOJI_PROPERTIES: &'static str = "\
emoji-properties produces one table of codepoint ranges for each emoji
property in emoji-data.txt (Emoji, Emoji_Presentation, Emoji_Modifier_Base,
Emoji_Modifier, Emoji_Component and Extended_Pictographic). The emitted file
also records the emoji data version it was generated from.
";

const ABOUT_TEST_EMOJI_DATA: &'static str = "\
test-emoji-data parses the emoji-data.txt file and emits its rows on stdout.
The purpose of this command is to diff the output with the input (minus
comments) and confirm that they agree. This is a sanity test on the parser.
";

const ABOUT_CLASSIFY: &'static str = "\
classify prints one tab separated report line per input. The columns are: the
input, whether it contains only emoji, whether it is a single emoji, the number
of emoji, the emoji found (space separated), the first skin tone found (or
'-') and the zero width joiner components joined by '+' (or '-').
";

const ABOUT_FILTER: &'static str = "\
filter treats each line of stdin as one proposed insertion into an emoji-only
text field and prints what would be forwarded. Rejected lines print nothing.
By default only single emoji are accepted; --lenient accepts any non-empty
line.
";

const ABOUT_STRIP: &'static str = "\
strip removes every emoji from its input. Everything else is kept verbatim
unless --collapse is given, in which case whitespace runs are collapsed to a
single space and the result is trimmed.
";

const ABOUT_NORMALIZE: &'static str = "\
normalize rewrites the skin tone of every emoji that supports one. Existing
skin tones are removed first. With --skin-tone strip, no new tone is added.
";

const ABOUT_COMPONENTS: &'static str = "\
components splits a single emoji into the emoji joined by zero width joiners
and prints them space separated. Inputs that are not exactly one emoji print an
empty line.
";

/// Build a clap application.
pub fn app() -> App<'static, 'static> {
    // Various common flags and arguments.
    let flag_chars = Arg::with_name("chars").long("chars").help(
        "Write codepoints as character literals. If a codepoint \
         cannot be written as a character literal, then it is \
         silently dropped.",
    );
    let flag_trie_set = Arg::with_name("trie-set").long("trie-set").help(
        "Write codepoint sets as a compressed trie. \
         Code using this trie depends on the ucd_trie crate.",
    );
    let ucd_dir = Arg::with_name("ucd-dir").required(true).help(
        "Directory containing the Unicode character database files, \
         including emoji/emoji-data.txt.",
    );
    let arg_text = Arg::with_name("text").multiple(true).help(
        "The text to process. When absent, each line of stdin is \
         processed separately.",
    );
    let flag_skin_tone = Arg::with_name("skin-tone")
        .long("skin-tone")
        .takes_value(true)
        .value_name("TONE")
        .possible_values(&[
            "strip",
            "light",
            "medium-light",
            "medium",
            "medium-dark",
            "dark",
        ])
        .case_insensitive(true);
    let flag_debug = Arg::with_name("debug")
        .long("debug")
        .global(true)
        .help("Show debug messages on stderr.");
    let flag_trace = Arg::with_name("trace")
        .long("trace")
        .global(true)
        .help("Show debug and trace messages on stderr.");

    // Subcommands.
    let cmd_emoji_properties = SubCommand::with_name("emoji-properties")
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Create the emoji property tables.")
        .before_help(ABOUT_EMOJI_PROPERTIES)
        .arg(ucd_dir.clone())
        .arg(flag_chars.clone())
        .arg(flag_trie_set.clone())
        .arg(Arg::with_name("include").long("include").takes_value(true).help(
            "A comma separated list of properties to include. \
             When absent, all available properties are included.",
        ))
        .arg(Arg::with_name("exclude").long("exclude").takes_value(true).help(
            "A comma separated list of properties to exclude. \
             When absent, no properties are excluded. This overrides \
             properties specified with the --include flag.",
        ))
        .arg(Arg::with_name("list-properties").long("list-properties").help(
            "List the properties that can be generated with this \
             command.",
        ));
    let cmd_test_emoji_data = SubCommand::with_name("test-emoji-data")
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Test the emoji-data.txt parser.")
        .before_help(ABOUT_TEST_EMOJI_DATA)
        .arg(ucd_dir.clone());
    let cmd_classify = SubCommand::with_name("classify")
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Report how each input is classified.")
        .before_help(ABOUT_CLASSIFY)
        .arg(arg_text.clone());
    let cmd_filter = SubCommand::with_name("filter")
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Filter stdin lines as keystrokes into an emoji field.")
        .before_help(ABOUT_FILTER)
        .arg(
            Arg::with_name("lenient")
                .long("lenient")
                .help("Accept any non-empty insertion, not only emoji."),
        )
        .arg(
            flag_skin_tone
                .clone()
                .help("Normalize accepted insertions to this skin tone."),
        );
    let cmd_strip = SubCommand::with_name("strip")
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Remove emoji from text.")
        .before_help(ABOUT_STRIP)
        .arg(arg_text.clone())
        .arg(
            Arg::with_name("collapse")
                .long("collapse")
                .help("Collapse whitespace runs and trim the result."),
        );
    let cmd_normalize = SubCommand::with_name("normalize")
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Rewrite skin tones.")
        .before_help(ABOUT_NORMALIZE)
        .arg(arg_text.clone())
        .arg(
            flag_skin_tone
                .clone()
                .required(true)
                .help("The skin tone to normalize to."),
        );
    let cmd_components = SubCommand::with_name("components")
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Split an emoji into its zero width joiner components.")
        .before_help(ABOUT_COMPONENTS)
        .arg(arg_text.clone());

    // The actual App.
    App::new("emoji-kit")
        .version(clap::crate_version!())
        .about(ABOUT)
        .template(TEMPLATE)
        .max_term_width(100)
        .setting(AppSettings::UnifiedHelpMessage)
        .arg(flag_debug)
        .arg(flag_trace)
        .subcommand(cmd_emoji_properties)
        .subcommand(cmd_test_emoji_data)
        .subcommand(cmd_classify)
        .subcommand(cmd_filter)
        .subcommand(cmd_strip)
        .subcommand(cmd_normalize)
        .subcommand(cmd_components)
}
