/*
 * ==========================================================================
 * QUILL - The Quill Expression Language
 * ==========================================================================
 *
 * File:     parser_tests.rs
 * Purpose:  Integration tests for the Quill parser: precedence,
 *           associativity, member/call chaining, and failure paths.
 *
 * Author:   Quill Contributors
 *
 * License:
 * This file is part of the Quill language front-end project.
 *
 * Quill is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use quill::{parse, Expr, NodeKind, ParseError, Stmt, TokenKind};

/// Parses a source expected to hold exactly one expression statement and
/// returns that expression.
fn parse_expr(source: &str) -> Expr {
    let program = parse(source).expect("source should parse");
    assert_eq!(program.statements.len(), 1, "expected a single statement");
    let Stmt::Expression(expression) = program.statements.into_iter().next().unwrap();
    expression
}

/// Renders the parse of `source` back to canonical text.
fn rendered(source: &str) -> String {
    parse(source).expect("source should parse").to_string()
}

// ---------------------------------------------------------------------
// Precedence
// ---------------------------------------------------------------------

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(rendered("1+2*3"), "(1+(2*3))");
    assert_eq!(rendered("1*2+3"), "((1*2)+3)");
}

#[test]
fn full_precedence_ladder_groups_inward() {
    // assignment < || < && < equality < comparison < additive < multiplicative
    assert_eq!(
        rendered("a = b || c && d == e < f + g * h"),
        "a = (b||(c&&(d==(e<(f+(g*h))))))"
    );
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(rendered("(1+2)*3"), "((1+2)*3)");
}

#[test]
fn division_and_subtraction_fold_left() {
    assert_eq!(rendered("1-2-3"), "((1-2)-3)");
    assert_eq!(rendered("8/4/2"), "((8/4)/2)");
}

#[test]
fn logical_operators_fold_left() {
    assert_eq!(rendered("a && b || c"), "((a&&b)||c)");
    assert_eq!(rendered("a || b || c"), "((a||b)||c)");
}

#[test]
fn equality_produces_logical_nodes() {
    let expression = parse_expr("a == b");
    assert_eq!(expression.kind(), NodeKind::Logical);

    // Comparison stays a plain binary node.
    let expression = parse_expr("a < b");
    assert_eq!(expression.kind(), NodeKind::Binary);
}

// ---------------------------------------------------------------------
// Associativity
// ---------------------------------------------------------------------

#[test]
fn assignment_is_right_associative() {
    let expression = parse_expr("a=b=c");

    let Expr::Assign { operator, left, right } = expression else {
        panic!("expected an assignment");
    };
    assert_eq!(operator, "=");
    assert_eq!(*left, Expr::Identifier("a".to_string()));

    let Expr::Assign { left: inner_left, right: inner_right, .. } = *right
    else {
        panic!("expected a nested assignment on the right");
    };
    assert_eq!(*inner_left, Expr::Identifier("b".to_string()));
    assert_eq!(*inner_right, Expr::Identifier("c".to_string()));
}

#[test]
fn compound_assignment_keeps_its_spelling() {
    assert_eq!(rendered("x += 1+2"), "x += (1+2)");
    assert_eq!(rendered("x /= y"), "x /= y");
}

#[test]
fn unary_operators_stack_right_recursively() {
    let expression = parse_expr("--a");

    let Expr::Unary { operator, operand } = expression else {
        panic!("expected a unary expression");
    };
    assert_eq!(operator, "-");
    let Expr::Unary { operator: inner_op, operand: inner } = *operand else {
        panic!("expected a nested unary expression");
    };
    assert_eq!(inner_op, "-");
    assert_eq!(*inner, Expr::Identifier("a".to_string()));

    assert_eq!(rendered("-+!x"), "(-(+(!x)))");
}

// ---------------------------------------------------------------------
// Members, calls, new, super, this
// ---------------------------------------------------------------------

#[test]
fn member_and_call_chains_interleave() {
    assert_eq!(rendered("a.b[c].d()"), "a.b[c].d()");
}

#[test]
fn member_chains_fold_left() {
    let expression = parse_expr("a.b.c");

    // Outermost member has property c; its object is Member(a, b).
    let Expr::Member { object, property, computed } = expression else {
        panic!("expected a member expression");
    };
    assert!(!computed);
    assert_eq!(*property, Expr::Identifier("c".to_string()));
    let Expr::Member { object: inner_object, property: inner_property, .. } =
        *object
    else {
        panic!("expected a nested member expression");
    };
    assert_eq!(*inner_object, Expr::Identifier("a".to_string()));
    assert_eq!(*inner_property, Expr::Identifier("b".to_string()));
}

#[test]
fn computed_members_take_full_expressions() {
    assert_eq!(rendered("a[1+2]"), "a[(1+2)]");
}

#[test]
fn chained_calls_wrap_recursively() {
    assert_eq!(rendered("f()()(x)"), "f()()(x)");

    let expression = parse_expr("f()()");
    let Expr::Call { callee, .. } = expression else {
        panic!("expected a call expression");
    };
    assert_eq!(callee.kind(), NodeKind::Call);
}

#[test]
fn call_arguments_are_assignment_expressions() {
    assert_eq!(rendered("f(a = 1, b+c)"), "f(a = 1, (b+c))");
}

#[test]
fn new_expression_takes_member_callee_and_arguments() {
    assert_eq!(rendered("new Point(1, 2)"), "new Point(1, 2)");
    assert_eq!(rendered("new geometry.Point()"), "new geometry.Point()");
}

#[test]
fn super_is_always_called() {
    assert_eq!(rendered("super(x)"), "super(x)");

    // A bare super with no argument list is rejected.
    let error = parse("super").unwrap_err();
    assert_eq!(
        error,
        ParseError::UnexpectedEndOfInput {
            expected: TokenKind::LParen,
        }
    );
}

#[test]
fn this_participates_in_member_chains() {
    assert_eq!(rendered("this.x = 5"), "this.x = 5");
}

// ---------------------------------------------------------------------
// Literals and statements
// ---------------------------------------------------------------------

#[test]
fn literal_forms_parse_and_render() {
    assert_eq!(parse_expr("42"), Expr::Number(42));
    assert_eq!(parse_expr("true"), Expr::Boolean(true));
    assert_eq!(parse_expr("false"), Expr::Boolean(false));
    assert_eq!(parse_expr("null"), Expr::Null);
    assert_eq!(rendered("null"), "null");
}

#[test]
fn string_literals_are_stored_without_quotes() {
    assert_eq!(parse_expr(r#""hello""#), Expr::Str("hello".to_string()));
    assert_eq!(parse_expr("'hello'"), Expr::Str("hello".to_string()));
    assert_eq!(rendered("'hello'"), "\"hello\"");
}

#[test]
fn empty_input_is_an_empty_program() {
    let program = parse("").expect("empty source is valid");
    assert!(program.statements.is_empty());
    assert_eq!(program.kind(), NodeKind::Program);
    assert_eq!(program.to_string(), "");

    // Comment-only input is also empty.
    let program = parse("// nothing here\n/* still nothing */").unwrap();
    assert!(program.statements.is_empty());
}

#[test]
fn consecutive_expressions_form_separate_statements() {
    let program = parse("a b").expect("two statements should parse");
    assert_eq!(program.statements.len(), 2);
    assert_eq!(
        program.statements[0].kind(),
        NodeKind::ExpressionStatement
    );
}

#[test]
fn assignment_left_side_is_not_validated_by_the_grammar() {
    // LHS validity is deferred to a later semantic pass.
    let expression = parse_expr("5 = x");
    let Expr::Assign { left, .. } = expression else {
        panic!("expected an assignment");
    };
    assert_eq!(*left, Expr::Number(5));
}

// ---------------------------------------------------------------------
// Failure paths
// ---------------------------------------------------------------------

#[test]
fn unterminated_call_names_the_missing_delimiter() {
    let error = parse("f(").unwrap_err();
    assert_eq!(
        error,
        ParseError::UnexpectedEndOfInput {
            expected: TokenKind::RParen,
        }
    );
    assert!(error.to_string().contains("')'"));
}

#[test]
fn category_mismatch_names_found_and_expected() {
    // After '.', only an identifier may follow.
    let error = parse("a.1").unwrap_err();
    assert_eq!(
        error,
        ParseError::UnexpectedToken {
            found: TokenKind::Number,
            expected: TokenKind::Identifier,
        }
    );
    let message = error.to_string();
    assert!(message.contains("number literal"));
    assert!(message.contains("identifier"));
}

#[test]
fn stray_token_at_primary_position_is_rejected() {
    let error = parse(")").unwrap_err();
    assert_eq!(
        error,
        ParseError::UnexpectedPrimary {
            found: TokenKind::RParen,
        }
    );
}

#[test]
fn lexical_failure_aborts_the_parse() {
    let error = parse("1 @ 2").unwrap_err();
    assert_eq!(error, ParseError::UnrecognizedInput);
    assert_eq!(error.code(), "Q0001");
}

#[test]
fn oversized_numeric_literal_is_rejected() {
    let error = parse("99999999999999999999999").unwrap_err();
    assert_eq!(
        error,
        ParseError::InvalidNumericLiteral(
            "99999999999999999999999".to_string()
        )
    );
}

// ---------------------------------------------------------------------
// Round-trip structure
// ---------------------------------------------------------------------

#[test]
fn rendered_operator_expressions_reparse_isomorphically() {
    let sources = [
        "1+2*3",
        "a = b || c && d == e < f + g * h",
        "-+!x",
        "a.b[c].d()",
        "f(a = 1, b+c)()",
        "new geometry.Point(1, 2)",
    ];

    for source in sources {
        let first = parse(source).expect("source should parse");
        let reparsed = parse(&first.to_string())
            .expect("rendered text should reparse");
        assert_eq!(first, reparsed, "round-trip diverged for {:?}", source);
    }
}
