use clap::Parser;
use smartnotes::cli::args::{Args, Command};
use smartnotes::ports::Tab;
use std::path::PathBuf;

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["smartnotes", "1700000000000"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_generate_command_when_parsing_then_uses_defaults() {
    // Arrange
    let args = vec!["smartnotes", "generate", "--title", "Biology", "--text", "Cells divide."];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Generate {
            title,
            text,
            file,
            tab,
            json,
            save,
            export,
        } => {
            assert_eq!(title, "Biology");
            assert_eq!(text.as_deref(), Some("Cells divide."));
            assert_eq!(file, None);
            assert_eq!(tab, Tab::Both);
            assert!(!json);
            assert!(!save);
            assert!(!export);
        }
        _ => panic!("Expected Generate command"),
    }
    assert_eq!(parsed.store, None);
    assert_eq!(parsed.config, None);
}

#[test]
fn given_generate_with_flags_when_parsing_then_sets_them() {
    // Arrange
    let args = vec![
        "smartnotes", "generate", "-t", "Physics", "-f", "notes.txt", "--tab", "flashcards",
        "--save", "--export",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Generate {
            file, tab, save, export, ..
        } => {
            assert_eq!(file, Some(PathBuf::from("notes.txt")));
            assert_eq!(tab, Tab::Flashcards);
            assert!(save);
            assert!(export);
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn given_generate_without_title_when_parsing_then_fails() {
    let result = Args::try_parse_from(vec!["smartnotes", "generate", "--text", "x"]);

    assert!(result.is_err(), "Title is required");
}

#[test]
fn given_text_and_file_when_parsing_then_fails() {
    let result = Args::try_parse_from(vec![
        "smartnotes", "generate", "-t", "T", "--text", "x", "--file", "y.txt",
    ]);

    assert!(result.is_err(), "--text and --file conflict");
}

#[test]
fn given_delete_command_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["smartnotes", "delete", "1700000000000"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Delete { note_id } => assert_eq!(note_id, "1700000000000"),
        _ => panic!("Expected Delete command"),
    }
}

#[test]
fn given_global_store_flag_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["smartnotes", "-s", "/tmp/notes", "export", "1700000000000"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Export { note_id } => assert_eq!(note_id, "1700000000000"),
        _ => panic!("Expected Export command"),
    }
    assert_eq!(parsed.store, Some(PathBuf::from("/tmp/notes")));
}

#[test]
fn given_show_with_json_when_parsing_then_succeeds() {
    let parsed = Args::try_parse_from(vec!["smartnotes", "show", "42", "--json", "--tab", "summary"]).unwrap();

    match parsed.command {
        Command::Show { note_id, tab, json } => {
            assert_eq!(note_id, "42");
            assert_eq!(tab, Tab::Summary);
            assert!(json);
        }
        _ => panic!("Expected Show command"),
    }
}

#[test]
fn given_list_with_search_when_parsing_then_succeeds() {
    let parsed = Args::try_parse_from(vec!["smartnotes", "list", "bio", "-vv"]).unwrap();

    match parsed.command {
        Command::List { search } => assert_eq!(search.as_deref(), Some("bio")),
        _ => panic!("Expected List command"),
    }
    assert_eq!(parsed.verbose, 2);
}

#[test]
fn given_unknown_tab_when_parsing_then_fails() {
    let result = Args::try_parse_from(vec!["smartnotes", "show", "1", "--tab", "quiz"]);

    assert!(result.is_err());
}
