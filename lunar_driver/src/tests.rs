use lunar_base::{diagnostic::Dummy, source_file::SourceFile};
use lunar_lexical::token_stream::TokenStream;

use crate::{Argument, Dump, Parser};

fn dump(source: &str) -> String {
    let source_file = SourceFile::temp(source).unwrap();
    let token_stream = TokenStream::tokenize(&source_file, &Dummy).unwrap();

    Dump {
        token_stream: &token_stream,
    }
    .to_string()
}

#[test]
fn dump_prints_tag_and_lexeme() {
    assert_eq!(
        dump("local s = 'a\\nb' -- note\nprint(s, 1.5)\n"),
        "[RESERVED] local\n\
         [NAME] s\n\
         [SYMBOL] =\n\
         [STRING] 'a\\nb'\n\
         [EOL]\n\
         [NAME] print\n\
         [SYMBOL] (\n\
         [NAME] s\n\
         [SYMBOL] ,\n\
         [NUMBER] 1.5\n\
         [SYMBOL] )\n\
         [EOL]\n"
    );
}

#[test]
fn dump_of_empty_source_is_empty() {
    assert_eq!(dump(""), "");
    assert_eq!(dump("  -- only a comment"), "");
}

#[test]
fn argument_file_is_optional() {
    let argument = Argument::parse_from(["lunar"]);
    assert_eq!(argument.file, None);

    let argument = Argument::parse_from(["lunar", "script.lua"]);
    assert_eq!(argument.file, Some("script.lua".into()));
}
