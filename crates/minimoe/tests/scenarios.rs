//! End-to-end scenarios exercising the full lex-then-parse pipeline.

use minimoe::{compile, DiagnosticKind};

#[test]
fn empty_source_produces_no_lines_and_no_diagnostics() {
    let (module, diagnostics) = compile("");
    assert!(diagnostics.is_empty());
    assert!(module.name.is_none());
    assert!(module.functions.is_empty());
}

#[test]
fn integer_literal_line_round_trips_through_the_full_pipeline() {
    let (_, diagnostics) = compile("123\n");
    assert!(diagnostics.is_empty());
}

#[test]
fn string_literal_with_escapes_is_decoded_before_reaching_the_parser() {
    let (_, diagnostics) = compile("\"a\\nb\"\n");
    assert!(diagnostics.is_empty());
}

#[test]
fn unterminated_string_is_reported_as_a_lexer_diagnostic() {
    let (_, diagnostics) = compile("\"oops\n");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::IncompleteString);
}

#[test]
fn declaration_pretty_print_matches_the_mixfix_header_with_alias() {
    let (module, diagnostics) =
        compile("phrase SumFrom(low)To(high) : SumFrom\n    result = 1\nend\ntag t\n");
    assert!(diagnostics.is_empty());
    assert_eq!(module.functions.len(), 1);
    assert_eq!(module.functions[0].to_log(), "Phrase:SumFrom_To(low, high){1}");
    assert_eq!(module.tags.len(), 1);
    assert_eq!(module.tags[0].to_log(), "Tag(t)");
}

#[test]
fn mixfix_invocation_list_literal_and_binary_operators_nest_correctly() {
    use minimoe::ast::Expression;
    use minimoe_par::{load_predefined_symbol, parse_expression, SymbolStack, TokenCursor};

    let file = minimoe_lex::parse("(1,2,3) or (1 and 2) and \"doyoubi\"");
    let mut symbols = SymbolStack::new();
    symbols.push(load_predefined_symbol());
    let mut diagnostics = Vec::new();
    let mut cursor = TokenCursor::new(&file.lines[0].tokens);
    let expr: Option<Expression> = parse_expression(&mut cursor, &symbols, &mut diagnostics);

    assert!(diagnostics.is_empty());
    assert_eq!(
        expr.unwrap().to_log(),
        "or(List(1, 2, 3), and(and(1, 2), \"doyoubi\"))"
    );
}

#[test]
fn missing_end_on_a_function_is_reported_and_does_not_swallow_the_whole_file() {
    let (module, diagnostics) = compile("phrase greet(name)\ntag t\n");
    assert!(module.functions.is_empty());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::ExpectEndForFunctionDeclaration);
    assert_eq!(module.tags.len(), 1);
}

#[test]
fn cps_and_category_declarations_are_reported_as_not_implemented() {
    let (_, diagnostics) = compile("cps foo\ncategory bar\n");
    assert_eq!(diagnostics.len(), 2);
}
