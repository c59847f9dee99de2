//! Property-based tests for option resolution.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use proptest::prelude::*;

use auto_tagger::core::options::resolver::{from_command_line, from_file};
use auto_tagger::core::options::grammar::parse_bool;
use auto_tagger::core::options::{CommandKind, OptionError, Options};
use auto_tagger::core::settings::{Invocation, Settings, TagCommand};
use auto_tagger::core::types::StageName;

/// Strategy for generating stage-like words that are not command words.
fn stage_word() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}".prop_filter("must not be a command word", |word| {
        CommandKind::from_word(word).is_none()
    })
}

/// Strategy for boolean literals with the value they stand for.
fn bool_literal() -> impl Strategy<Value = (String, bool)> {
    prop_oneof![
        Just(("true".to_string(), true)),
        Just(("YES".to_string(), true)),
        Just(("+".to_string(), true)),
        Just(("False".to_string(), false)),
        Just(("no".to_string(), false)),
        Just(("-".to_string(), false)),
        Just(("nil".to_string(), false)),
    ]
}

/// Strategy for a remote flag written as one token or two.
fn remote_flag() -> impl Strategy<Value = (Vec<String>, String)> {
    ("[a-z]{1,10}", any::<bool>()).prop_map(|(remote, joined)| {
        let tokens = if joined {
            vec![format!("--remote={remote}")]
        } else {
            vec!["--remote".to_string(), remote.clone()]
        };
        (tokens, remote)
    })
}

proptest! {
    #[test]
    fn unknown_first_word_is_deprecated_create(stage in stage_word()) {
        let options = from_command_line(&[stage.as_str()]).unwrap();
        prop_assert_eq!(options.command, Some(CommandKind::Create));
        prop_assert!(options.deprecated);
        prop_assert_eq!(options.stage.as_deref(), Some(stage.as_str()));
    }

    #[test]
    fn shorthand_resolves_to_create(stage in stage_word(), path in "[a-z./]{1,12}") {
        let options = from_command_line(&[stage.as_str(), path.as_str()]).unwrap();
        let expected = Invocation::Tag(TagCommand::Create {
            stage: StageName::new(stage.clone()).unwrap(),
            path,
            deprecated: true,
        });
        prop_assert_eq!(Invocation::resolve(&options).unwrap(), expected);
    }

    #[test]
    fn boolean_flags_accept_every_literal((literal, value) in bool_literal()) {
        let fetch = format!("--fetch-refs={literal}");
        let options = from_command_line(&["create", "demo", fetch.as_str(), "--push-refs", literal.as_str()]).unwrap();
        prop_assert_eq!(options.fetch_refs, Some(value));
        prop_assert_eq!(options.push_refs, Some(value));
    }

    #[test]
    fn refs_to_keep_takes_any_u32(n in any::<u32>()) {
        let flag = format!("--refs-to-keep={n}");
        let options = from_command_line(&["cleanup", "demo", flag.as_str()]).unwrap();
        prop_assert_eq!(options.refs_to_keep, Some(n));
    }

    #[test]
    fn flag_position_does_not_matter((flag, remote) in remote_flag(), stage in stage_word()) {
        let mut before = flag.clone();
        before.extend(["list".to_string(), stage.clone()]);
        let mut after = vec!["list".to_string(), stage.clone()];
        after.extend(flag);

        let before = from_command_line(before.as_slice()).unwrap();
        let after = from_command_line(after.as_slice()).unwrap();

        prop_assert_eq!(&before, &after);
        prop_assert_eq!(before.remote.as_deref(), Some(remote.as_str()));
    }

    #[test]
    fn parsing_is_deterministic(words in prop::collection::vec("[a-z-]{1,8}", 0..6)) {
        let first = from_command_line(words.as_slice());
        let second = from_command_line(words.as_slice());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn command_line_wins_over_defaults_file(cli in "[a-z]{1,10}", file in "[a-z]{1,10}") {
        let command_line = from_command_line(&["config", "--remote", cli.as_str()]).unwrap();
        let defaults = from_file(&["--remote", file.as_str(), "--ref-path", "deploys"]).unwrap();

        let settings = Settings::from_options(&command_line.layered_over(defaults));

        prop_assert_eq!(settings.remote, cli);
        prop_assert_eq!(settings.ref_path, "deploys");
    }

    #[test]
    fn defaults_file_never_sets_a_command(words in prop::collection::vec("[a-z]{1,8}", 0..4)) {
        let options = from_file(words.as_slice()).unwrap();
        prop_assert_eq!(options, Options::default());
    }

    #[test]
    fn offline_value_decides_fetch_and_push(
        fetch in any::<Option<bool>>(),
        push in any::<Option<bool>>(),
        offline in any::<bool>(),
    ) {
        let settings = Settings::from_options(&Options {
            fetch_refs: fetch,
            push_refs: push,
            offline: Some(offline),
            ..Default::default()
        });
        prop_assert_eq!(settings.fetch_refs, offline);
        prop_assert_eq!(settings.push_refs, offline);
        prop_assert_eq!(settings.offline, !offline);
    }

    #[test]
    fn misspelled_optional_boolean_is_rejected(word in "[a-z]{1,8}", stage in stage_word()) {
        prop_assume!(parse_bool(&word).is_err());
        let result = from_command_line(&["create", stage.as_str(), "--dry-run", word.as_str()]);
        let is_malformed = matches!(result, Err(OptionError::MalformedOptionValue { .. }));
        prop_assert!(is_malformed);
    }
}
