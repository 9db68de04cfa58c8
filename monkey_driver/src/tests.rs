use std::{path::PathBuf, process::ExitCode};

use monkey_base::source_file::SourceFile;

use super::{execute, prompt, Argument, Parser};

fn argument(dump_tokens: bool, dump_syntax: bool) -> Argument {
    Argument {
        file: None,
        dump_tokens,
        dump_syntax,
    }
}

#[test]
fn file_is_optional() {
    let argument = Argument::try_parse_from(["monkey"]).unwrap();
    assert_eq!(argument, self::argument(false, false));

    let argument =
        Argument::try_parse_from(["monkey", "--dump-syntax", "program.mk"]).unwrap();
    assert_eq!(argument.file, Some(PathBuf::from("program.mk")));
    assert!(argument.dump_syntax);
    assert!(!argument.dump_tokens);
}

#[test]
fn unknown_flags_are_rejected() {
    assert!(Argument::try_parse_from(["monkey", "--dump-everything"]).is_err());
}

#[test]
fn execute_reports_syntax_errors() {
    let valid = SourceFile::in_memory("<test>", "let x = 5; x * 2;");
    let invalid = SourceFile::in_memory("<test>", "let x 5;");

    for argument in [argument(false, false), argument(false, true)] {
        assert!(execute(&valid, &argument));
        assert!(!execute(&invalid, &argument));
    }

    // tokens are dumped without parsing
    assert!(execute(&invalid, &argument(true, false)));
}

#[test]
fn execute_loads_files() {
    let source_file = SourceFile::temp("if (x < 10) { return 5; } else { 7 }").unwrap();

    assert!(execute(&source_file, &argument(false, true)));
}

#[test]
fn prompt_runs_until_the_input_ends() {
    let input: &[u8] = b"let x = 5;\n1 +\n\xff\xfe\n10\n";

    assert_eq!(prompt(input, &argument(false, false)), ExitCode::SUCCESS);
}
