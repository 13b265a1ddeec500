use std::fs;

use golite::{
    Options, Outcome,
    error::ErrorKind,
    interpreter::{parser::core::MAX_NESTING_DEPTH, value::core::Value},
    run, run_with_options,
};
use indoc::indoc;
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

/// Wraps `body` in a program importing `fmt`. The first line of `body` is
/// line 6 of the program.
fn program(body: &str) -> String {
    format!("package main\n\nimport \"fmt\"\n\nfunc main() {{\n{body}}}\n")
}

fn assert_success(body: &str) -> Outcome {
    let outcome = run(&program(body));
    assert!(outcome.is_success(),
            "Program failed:\n{body}\nErrors: {:?}",
            outcome.lines());
    outcome
}

fn assert_failure(body: &str) -> Outcome {
    let outcome = run(&program(body));
    assert!(!outcome.is_success(), "Program succeeded but was expected to fail:\n{body}");
    outcome
}

fn printed(body: &str) -> Vec<String> {
    assert_success(body).printed()
}

#[test]
fn demo_programs_run_cleanly() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "go")
                                      })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let outcome = run(&source);
        assert!(outcome.is_success(),
                "Demo {path:?} failed:\n{}",
                outcome.lines().join("\n"));
        assert!(!outcome.printed().is_empty(), "Demo {path:?} printed nothing");
    }

    assert!(count > 0, "No demo programs found in demos/");
}

#[test]
fn assignment_and_basic_arithmetic() {
    let outcome = assert_success(indoc! {"
        a := 3
        a = a + 4
        fmt.Println(a)
    "});

    assert_eq!(outcome.printed(), vec!["7"]);
    assert_eq!(outcome.environment.get("a"), Some(&Value::Int(7)));
}

#[test]
fn arithmetic_precedence_and_grouping() {
    assert_eq!(printed("fmt.Println(1 + 2 * 3, (1 + 2) * 3, 10 - 4 - 3)\n"), vec!["7 9 3"]);
    assert_eq!(printed("fmt.Println(-2 * -3, 2 - -3)\n"), vec!["6 5"]);
}

#[test]
fn division_and_modulo_round_toward_negative_infinity() {
    assert_eq!(printed("fmt.Println(7 / 2, -7 / 2, 7 / -2, -7 / -2)\n"), vec!["3 -4 -4 3"]);
    assert_eq!(printed("fmt.Println(7 % 3, -7 % 3, 7 % -3, -7 % -3)\n"), vec!["1 2 -2 -1"]);
}

#[test]
fn string_concatenation() {
    let outcome = assert_success(indoc! {r#"
        s := "hi"
        s += "!"
        fmt.Println(s, s + s)
    "#});

    assert_eq!(outcome.printed(), vec!["hi! hi!hi!"]);
    assert_eq!(outcome.environment.get("s"), Some(&Value::from("hi!")));
}

#[test]
fn compound_assignment_and_steps() {
    let outcome = assert_success(indoc! {"
        x := 10
        x += 5
        x -= 3
        x *= 2
        x /= 5
        x %= 3
        x++
        x++
        x--
    "});

    assert_eq!(outcome.environment.get("x"), Some(&Value::Int(2)));
    assert_eq!(outcome.lines(),
               vec!["import \"fmt\"",
                    "x := 10",
                    "x += 5 -> 15",
                    "x -= 3 -> 12",
                    "x *= 2 -> 24",
                    "x /= 5 -> 4",
                    "x %= 3 -> 1",
                    "x++ -> 2",
                    "x++ -> 3",
                    "x-- -> 2"]);
}

#[test]
fn zero_values() {
    let outcome = assert_success(indoc! {"
        var a int
        var b bool
        var c string
        fmt.Println(a, b, c)
    "});

    assert_eq!(outcome.printed(), vec!["0 false "]);
    assert_eq!(outcome.environment.get("c"), Some(&Value::from("")));
}

#[test]
fn typed_declarations() {
    let outcome = assert_success(indoc! {r#"
        var n int = 4
        var ok bool = n > 3
        var name string = "go"
        const limit = 10
        fmt.Println(n, ok, name, limit)
    "#});

    assert_eq!(outcome.printed(), vec!["4 true go 10"]);
    assert!(outcome.environment.is_constant("limit"));
}

#[test]
fn declaration_with_wrong_type_is_not_bound() {
    let outcome = assert_failure("var n int = \"four\"\n");

    assert_eq!(outcome.error_kinds(), vec![ErrorKind::TypeMismatch]);
    assert_eq!(outcome.environment.get("n"), None);
}

#[test]
fn define_twice_is_a_redeclaration() {
    let outcome = assert_failure("x := 5\nx := 6\n");

    assert_eq!(outcome.lines(), vec!["Error on line 7: 'x' redeclared in this scope."]);
    assert_eq!(outcome.environment.get("x"), Some(&Value::Int(5)));
}

// Lookups check the global table before the local frames, so a local may
// never shadow a global: declaring one is a redeclaration.
#[test]
fn redeclaring_a_global_is_rejected_everywhere() {
    let source = indoc! {"
        package main

        var x = 1

        func main() {
            if true {
                x := 2
            }
            var x string
        }
    "};
    let outcome = run(source);

    assert_eq!(outcome.error_kinds(),
               vec![ErrorKind::Redeclaration, ErrorKind::Redeclaration]);
    assert_eq!(outcome.environment.get("x"), Some(&Value::Int(1)));
}

#[test]
fn block_locals_do_not_outlive_their_block() {
    let outcome = assert_failure(indoc! {"
        if true {
            inner := 1
        }
        fmt.Println(inner)
    "});

    assert_eq!(outcome.error_kinds(), vec![ErrorKind::UndefinedIdentifier]);
    assert!(outcome.printed().is_empty());
}

#[test]
fn sibling_blocks_may_reuse_names() {
    assert_eq!(printed(indoc! {"
        if true {
            v := 1
            fmt.Println(v)
        }
        if true {
            v := 2
            fmt.Println(v)
        }
    "}),
               vec!["1", "2"]);
}

#[test]
fn constants_reject_assignment() {
    let outcome = assert_failure(indoc! {"
        const c = 1
        c = 2
        c += 1
        c++
    "});

    assert_eq!(outcome.error_kinds(),
               vec![ErrorKind::ConstAssign, ErrorKind::ConstAssign, ErrorKind::ConstAssign]);
    assert_eq!(outcome.environment.get("c"), Some(&Value::Int(1)));
}

#[test]
fn constant_without_value_is_a_syntax_error() {
    let outcome = assert_failure("const c int\n");

    assert!(outcome.syntax_error);
    assert_eq!(outcome.error_kinds(), vec![ErrorKind::Syntax]);
}

#[test]
fn assignment_never_changes_a_kind() {
    let outcome = assert_failure("x := 1\nx = \"a\"\n");

    assert_eq!(outcome.error_kinds(), vec![ErrorKind::TypeMismatch]);
    assert_eq!(outcome.environment.get("x"), Some(&Value::Int(1)));
}

#[test]
fn undefined_identifier() {
    let outcome = assert_failure("y = 3\nz := w + 1\n");

    assert_eq!(outcome.error_kinds(),
               vec![ErrorKind::UndefinedIdentifier, ErrorKind::UndefinedIdentifier]);
    assert_eq!(outcome.environment.get("z"), None);
}

#[test]
fn recoverable_expression_errors_bind_a_fallback() {
    let outcome = assert_failure(indoc! {r#"
        a := 1 + "one"
        b := 7 / 0
        c := true + false
        d := 1 < "two"
        e := -"text"
    "#});

    assert_eq!(outcome.error_kinds(),
               vec![ErrorKind::TypeMismatch,
                    ErrorKind::ZeroDivision,
                    ErrorKind::InvalidOperation,
                    ErrorKind::TypeMismatch,
                    ErrorKind::InvalidOperation]);
    assert_eq!(outcome.environment.get("a"), Some(&Value::Int(0)));
    assert_eq!(outcome.environment.get("b"), Some(&Value::Int(0)));
    assert_eq!(outcome.environment.get("c"), Some(&Value::Bool(false)));
    assert_eq!(outcome.environment.get("d"), Some(&Value::Bool(false)));
    assert_eq!(outcome.environment.get("e"), Some(&Value::from("")));
}

#[test]
fn compound_assignment_never_uses_a_fallback() {
    let outcome = assert_failure("x := 8\nx /= 0\nx += \"a\"\n");

    assert_eq!(outcome.error_kinds(), vec![ErrorKind::ZeroDivision, ErrorKind::TypeMismatch]);
    assert_eq!(outcome.environment.get("x"), Some(&Value::Int(8)));
}

#[test]
fn step_on_a_string_is_invalid() {
    let outcome = assert_failure("s := \"a\"\ns++\n");

    assert_eq!(outcome.error_kinds(), vec![ErrorKind::InvalidOperation]);
}

#[test]
fn integer_literals_are_range_checked() {
    let outcome = assert_failure(indoc! {"
        x := 9223372036854775808
        y := -9223372036854775808
        z := 9223372036854775807
        var a int = 9223372036854775808
        var b int = -9223372036854775808
        var c int = -9223372036854775809
    "});

    assert_eq!(outcome.lines(),
               vec!["Error on line 6: Overflow: cannot use 9223372036854775808 as int value.",
                    "Error on line 9: Overflow: cannot use 9223372036854775808 as int value.",
                    "Error on line 11: Overflow: cannot use -9223372036854775809 as int value."]);
    assert_eq!(outcome.environment.get("x"), None);
    assert_eq!(outcome.environment.get("y"), Some(&Value::Int(i64::MIN)));
    assert_eq!(outcome.environment.get("z"), Some(&Value::Int(i64::MAX)));
    assert_eq!(outcome.environment.get("a"), None);
    assert_eq!(outcome.environment.get("b"), Some(&Value::Int(i64::MIN)));
    assert_eq!(outcome.environment.get("c"), None);
}

#[test]
fn oversized_literals_are_reported_as_written() {
    let outcome = assert_failure(indoc! {"
        var x int = 99999999999999999999999999999999999999999999
        y := -00000000000000000000000000000000000000000000012
    "});

    assert_eq!(outcome.lines(),
               vec!["Error on line 6: Overflow: cannot use \
                     99999999999999999999999999999999999999999999 as int value."]);
    assert_eq!(outcome.environment.get("x"), None);
    assert_eq!(outcome.environment.get("y"), Some(&Value::Int(-12)));
}

#[test]
fn arithmetic_overflow_aborts_the_statement() {
    let outcome = assert_failure(indoc! {"
        big := 9223372036854775807
        next := big + 1
        big++
        small := -9223372036854775808
        flipped := -small
    "});

    assert_eq!(outcome.error_kinds(),
               vec![ErrorKind::Overflow, ErrorKind::Overflow, ErrorKind::Overflow]);
    assert_eq!(outcome.environment.get("next"), None);
    assert_eq!(outcome.environment.get("big"), Some(&Value::Int(i64::MAX)));
    assert_eq!(outcome.environment.get("flipped"), None);
}

#[test]
fn logical_precedence() {
    assert_eq!(printed("fmt.Println(true || false && false)\n"), vec!["false"]);
    assert_eq!(printed("fmt.Println(true || (false && false))\n"), vec!["true"]);
    assert_eq!(printed("fmt.Println(!false && 1 < 2, !true || 3 >= 3)\n"), vec!["true true"]);
}

#[test]
fn comparisons() {
    assert_eq!(printed("fmt.Println(1 < 2, 2 <= 2, 3 > 4, 4 >= 5, 5 == 5, 5 != 5)\n"),
               vec!["true true false false true false"]);
    assert_eq!(printed("fmt.Println(\"a\" < \"b\", \"b\" == \"b\", true != false)\n"),
               vec!["true true true"]);
}

#[test]
fn booleans_are_not_ordered() {
    let outcome = assert_failure("b := true < false\n");

    assert_eq!(outcome.error_kinds(), vec![ErrorKind::InvalidOperation]);
    assert_eq!(outcome.environment.get("b"), Some(&Value::Bool(false)));
}

#[test]
fn chained_comparison_is_a_syntax_error() {
    let outcome = assert_failure("b := 1 < 2 < 3\n");

    assert!(outcome.syntax_error);
    assert_eq!(outcome.lines(), vec!["Error on line 6: Comparison operators cannot be chained."]);

    for body in ["b := 1 == 1 == true\n", "b := 1 < 2 == 2 < 3 != true\n", "b := a < b < c\n"] {
        let outcome = assert_failure(body);
        assert_eq!(outcome.error_kinds(), vec![ErrorKind::Syntax], "{body}");
    }
}

#[test]
fn conditions_can_be_compared_for_equality() {
    let body = indoc! {"
        x := 1
        y := -2
        fmt.Println(x > 0 == y > 0, x > 0 != y > 0)
        fmt.Println(1 < 2 != false, true == 3 >= 3)
        same := x <= 1 == !(y >= 0)
        fmt.Println(same)
    "};

    assert_eq!(printed(body), vec!["false true", "true true", "true"]);
}

#[test]
fn nesting_up_to_the_limit_is_accepted() {
    // The body of `main` is one level deep already.
    let depth = MAX_NESTING_DEPTH - 1;
    let body = format!("fmt.Println({}7{})\n", "(".repeat(depth), ")".repeat(depth));

    assert_eq!(printed(&body), vec!["7"]);

    let sum = vec!["1"; MAX_NESTING_DEPTH].join(" + ");
    assert_eq!(printed(&format!("fmt.Println({sum})\n")), vec![MAX_NESTING_DEPTH.to_string()]);
}

#[test]
fn nesting_past_the_limit_is_a_syntax_error() {
    let depth = MAX_NESTING_DEPTH;
    let body = format!("fmt.Println({}1{})\n", "(".repeat(depth), ")".repeat(depth));
    let outcome = assert_failure(&body);

    assert_eq!(outcome.lines(),
               vec![format!("Error on line 6: Syntax error: nesting deeper than \
                             {MAX_NESTING_DEPTH} levels.")]);
}

#[test]
fn runaway_nesting_does_not_exhaust_the_stack() {
    let depth = 100_000;
    let parens = format!("fmt.Println({}1{})\n", "(".repeat(depth), ")".repeat(depth));
    let negations = format!("b := {}true\n", "!".repeat(depth));
    let blocks = format!("{}{}", "if true {\n".repeat(depth), "}\n".repeat(depth));

    for body in [parens, negations, blocks] {
        let outcome = assert_failure(&body);
        assert!(outcome.syntax_error);
        assert_eq!(outcome.error_kinds(), vec![ErrorKind::Syntax]);
        assert!(outcome.lines()[0].contains("nesting deeper than"));
    }
}

#[test]
fn syntax_errors_stop_everything() {
    let outcome = assert_failure(indoc! {"
        fmt.Println(1)
        x := (1 + 2
    "});

    assert_eq!(outcome.error_kinds(), vec![ErrorKind::Syntax]);
    assert!(outcome.notices.is_empty());
    assert!(outcome.printed().is_empty());
}

#[test]
fn program_structure_is_enforced() {
    for source in ["func main() {\n}\n",
                   "package main\nfunc main() {\n}\nx := 1\n",
                   "package main\nimport \"fmt\"\nimport \"fmt\"\nfunc main() {\n}\n",
                   "package main\nfunc main() {\n    x := 1 y := 2\n}\n"]
    {
        let outcome = run(source);
        assert!(outcome.syntax_error, "{source:?} should not parse");
    }
}

#[test]
fn illegal_characters_are_reported_and_skipped() {
    let outcome = run(&program("x := 1 @ + 2\nfmt.Println(x)\n"));

    assert_eq!(outcome.lines(), vec!["Error on line 6: Illegal character '@'."]);
    assert!(!outcome.syntax_error);
    assert_eq!(outcome.environment.get("x"), Some(&Value::Int(3)));
}

#[test]
fn println_requires_the_fmt_import() {
    let outcome = run("package main\n\nfunc main() {\n    fmt.Println(1)\n}\n");

    assert_eq!(outcome.lines(),
               vec!["Error on line 4: Import error: fmt.Println used without importing \"fmt\"."]);
    assert!(outcome.printed().is_empty());
}

#[test]
fn unknown_packages_cannot_be_imported() {
    let outcome = run("package main\n\nimport \"os\"\n\nfunc main() {\n}\n");

    assert_eq!(outcome.error_kinds(), vec![ErrorKind::Import]);
}

#[test]
fn if_else_chains() {
    let body = indoc! {r#"
        n := 15
        if n % 15 == 0 {
            fmt.Println("fizzbuzz")
        } else if n % 5 == 0 {
            fmt.Println("buzz")
        } else {
            fmt.Println(n)
        }
    "#};
    let outcome = assert_success(body);

    assert_eq!(outcome.printed(), vec!["fizzbuzz"]);
    assert_eq!(outcome.lines(),
               vec!["import \"fmt\"",
                    "n := 15",
                    "if true -> then branch",
                    "  fmt.Println(\"fizzbuzz\")"]);
}

#[test]
fn non_boolean_conditions_are_rejected() {
    let outcome = assert_failure("if 1 {\n    fmt.Println(1)\n}\n");

    assert_eq!(outcome.error_kinds(), vec![ErrorKind::TypeMismatch]);
    assert!(outcome.printed().is_empty());
}

#[test]
fn switch_with_subject() {
    let body = indoc! {r#"
        for i := 1; i <= 4; i++ {
            switch i {
            case 1:
                fmt.Println("one")
            case 2, 3:
                fmt.Println("few")
            default:
                fmt.Println("many")
            }
        }
    "#};

    assert_eq!(printed(body), vec!["one", "few", "few", "many"]);
}

#[test]
fn switch_without_subject() {
    let body = indoc! {r#"
        t := 7
        switch {
        case t < 5:
            fmt.Println("low")
        case t < 10:
            fmt.Println("mid")
        }
    "#};

    assert_eq!(printed(body), vec!["mid"]);
}

#[test]
fn break_leaves_a_switch() {
    let body = indoc! {r#"
        switch 2 {
        case 2:
            fmt.Println("before")
            break
            fmt.Println("after")
        }
        fmt.Println("done")
    "#};

    assert_eq!(printed(body), vec!["before", "done"]);
}

#[test]
fn switch_case_of_the_wrong_kind() {
    let outcome = assert_failure("switch 1 {\ncase \"1\":\n    fmt.Println(1)\n}\n");

    assert_eq!(outcome.error_kinds(), vec![ErrorKind::TypeMismatch]);
}

#[test]
fn duplicate_default_is_a_syntax_error() {
    let outcome = assert_failure("switch {\ndefault:\ndefault:\n}\n");

    assert_eq!(outcome.lines(), vec!["Error on line 8: Multiple defaults in switch."]);
}

#[test]
fn loop_shapes() {
    let body = indoc! {"
        sum := 0
        for i := 0; i < 5; i++ {
            sum += i
        }
        n := 3
        for n > 0 {
            n--
        }
        k := 0
        for {
            k++
            if k == 4 {
                break
            }
        }
        fmt.Println(sum, n, k)
    "};
    let outcome = assert_success(body);

    assert_eq!(outcome.printed(), vec!["10 0 4"]);
    assert_eq!(outcome.environment.get("i"), None);
}

#[test]
fn continue_skips_to_the_post_statement() {
    let body = indoc! {"
        for i := 0; i < 6; i++ {
            if i % 2 == 0 {
                continue
            }
            fmt.Println(i)
        }
    "};

    assert_eq!(printed(body), vec!["1", "3", "5"]);
}

#[test]
fn break_leaves_only_the_innermost_loop() {
    let body = indoc! {"
        for i := 0; i < 2; i++ {
            for j := 0; j < 10; j++ {
                if j == 1 {
                    break
                }
                fmt.Println(i, j)
            }
        }
    "};

    assert_eq!(printed(body), vec!["0 0", "1 0"]);
}

#[test]
fn loop_records_count_iterations() {
    let outcome = assert_success("for i := 0; i < 3; i++ {\n}\n");

    assert_eq!(outcome.lines(),
               vec!["import \"fmt\"",
                    "for clauses ran 3 iterations",
                    "  i := 0",
                    "  i++ -> 1",
                    "  i++ -> 2",
                    "  i++ -> 3"]);
}

#[test]
fn stray_loop_control_is_reported_once() {
    let outcome = assert_failure("break\nx := 1\n");

    assert_eq!(outcome.lines(), vec!["Error on line 6: 'break' is not inside a loop or switch."]);
    assert_eq!(outcome.environment.get("x"), Some(&Value::Int(1)));

    let outcome = assert_failure("switch {\ndefault:\n    continue\n}\n");
    assert_eq!(outcome.error_kinds(), vec![ErrorKind::LoopControl]);
}

#[test]
fn runaway_loops_hit_the_iteration_limit() {
    let options = Options { iteration_limit: Some(100) };
    let body = "n := 0\nfor {\n    n++\n}\nfmt.Println(n)\n";
    let outcome = run_with_options(&program(body), &options);

    assert_eq!(outcome.lines(),
               vec!["Error on line 7: Loop stopped after reaching the iteration limit of 100."]);
    assert_eq!(outcome.environment.get("n"), Some(&Value::Int(100)));
    assert_eq!(outcome.printed(), vec!["100"]);
}

#[test]
fn iteration_limit_can_be_disabled() {
    let options = Options { iteration_limit: None };
    let body = "n := 0\nfor n < 2000 {\n    n++\n}\n";
    let outcome = run_with_options(&program(body), &options);

    assert!(outcome.is_success());
    assert_eq!(outcome.environment.get("n"), Some(&Value::Int(2000)));
}

#[test]
fn errors_are_reported_in_order_and_execution_continues() {
    let outcome = assert_failure(indoc! {"
        a := 1 / 0
        b := undefined
        c := 2
        fmt.Println(a, c)
    "});

    assert_eq!(outcome.lines(),
               vec!["Error on line 6: Division by zero.",
                    "Error on line 7: Undefined identifier 'undefined'."]);
    assert_eq!(outcome.printed(), vec!["0 2"]);
}

#[test]
fn comments_are_ignored() {
    assert_eq!(printed("// leading comment\nx := 1 // trailing\nfmt.Println(x)\n"), vec!["1"]);
}
