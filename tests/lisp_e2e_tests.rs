/// End-to-end tests for the minisexp language
/// Demonstrates: Parser → Evaluator → rendering working together
use minisexp::{
    equal, parse, try_parse, Error, EvalConfig, Expr, LispEvaluator, SubstitutionStyle,
};

fn run(sources: &[&str]) -> String {
    let mut evaluator = LispEvaluator::new();
    let mut result = Expr::nil();
    for source in sources {
        result = evaluator.eval_str(source);
    }
    result.to_string()
}

#[test]
fn test_lisp_e2e_simple_arithmetic() {
    let program = parse("(+ 1 2)");

    let mut evaluator = LispEvaluator::new();
    let result = evaluator.try_eval(&program).unwrap();

    assert_eq!(result, Expr::atom("3"));
    assert_eq!(run(&["(* 2 3 4)"]), "24");
}

#[test]
fn test_lisp_e2e_nested_arithmetic() {
    assert_eq!(run(&["(+ (* 2 3) (* 4 5) 1)"]), "27");
    assert_eq!(run(&["(+)"]), "0");
    assert_eq!(run(&["(*)"]), "1");
}

#[test]
fn test_lisp_e2e_quote() {
    assert_eq!(run(&["(quote (a b c))"]), "(a b c)");
    assert_eq!(run(&["(quote (+ 1 2))"]), "(+ 1 2)");
}

#[test]
fn test_lisp_e2e_structural_equality() {
    assert_eq!(run(&["(eq? (quote (a b)) (quote (a b)))"]), "#t");
    assert_eq!(run(&["(eq? (quote (a b)) (quote (a c)))"]), "#f");
    assert_eq!(run(&["(eq? (+ 1 1) 2)"]), "#t");
}

#[test]
fn test_lisp_e2e_definitions() {
    let source = [
        "(def x 10)",
        "(def y 20)",
        "(+ x y)",
    ];
    assert_eq!(run(&source), "30");
}

#[test]
fn test_lisp_e2e_lambda() {
    assert_eq!(
        run(&["(def double (lambda (x) (+ x x)))", "(double 5)"]),
        "10"
    );
}

#[test]
fn test_lisp_e2e_higher_order() {
    let source = [
        "(def twice (lambda (f x) (f (f x))))",
        "(def inc (lambda (n) (+ n 1)))",
        "(twice inc 5)",
    ];
    assert_eq!(run(&source), "7");
}

#[test]
fn test_lisp_e2e_recursion() {
    let source = [
        "(def len (lambda (l) (if (eq? l ()) 0 (+ 1 (len (cons quote (cons (tail l) ())))))))",
        "(len (quote (quote (a b c d))))",
    ];
    assert_eq!(run(&source), "4");
}

#[test]
fn test_lisp_e2e_recursion_with_quoted_substitution() {
    let config = EvalConfig::default().with_substitution(SubstitutionStyle::Quoted);
    let mut evaluator = LispEvaluator::with_config(config);
    evaluator.eval_str("(def len (lambda (l) (if (eq? l ()) 0 (+ 1 (len (tail l))))))");
    assert_eq!(evaluator.eval_str("(len (quote (a b c d)))").to_string(), "4");
}

#[test]
fn test_lisp_e2e_list_building() {
    let source = [
        "(def pair (lambda (a b) (cons a (cons b ()))))",
        "(pair x 1)",
    ];
    assert_eq!(run(&source), "(x 1)");
}

#[test]
fn test_lisp_e2e_arguments_replace_parameters_textually() {
    assert_eq!(run(&["((lambda (x) (quote x)) 5)"]), "5");
    assert_eq!(
        run(&["((lambda (x) (tail x)) (quote (a b)))"]),
        "(badexpr unknown-operator-a)"
    );
    assert_eq!(run(&["((lambda (n) (def n 1)) foo)", "foo"]), "1");
}

#[test]
fn test_lisp_e2e_boolean_logic() {
    assert_eq!(run(&["(and #t (not #f) (or #f #t))"]), "#t");
    assert_eq!(run(&["(if (atom? (quote (a))) atom list)"]), "list");
    assert_eq!(run(&["(not 1)"]), "(badexpr not-boolean)");
}

#[test]
fn test_lisp_e2e_errors_are_values() {
    assert_eq!(run(&["(nosuchfn 1)"]), "(badexpr unknown-operator-nosuchfn)");

    let result = LispEvaluator::new().eval_str("(atom? 1 2)");
    assert!(result.is_bad_expr());
    assert_eq!(result.to_string(), "(badexpr bad-argnum-for-atom?)");
}

#[test]
fn test_lisp_e2e_error_short_circuits() {
    assert_eq!(
        run(&["(+ 1 (head 5) (nosuchfn))"]),
        "(badexpr head-of-atom)"
    );
}

#[test]
fn test_lisp_e2e_quoted_badexpr_is_data() {
    assert_eq!(
        run(&["(head (quote (badexpr made-up)))"]),
        "badexpr"
    );
    assert_eq!(
        run(&["(eq? (quote (badexpr x)) (quote (badexpr x)))"]),
        "#t"
    );
}

#[test]
fn test_lisp_e2e_unclosed_input() {
    assert_eq!(try_parse("(+ 1 2"), Err(Error::ExtraBrackets));
    assert_eq!(parse("(+ 1 2").to_string(), "(badexpr extra-brackets?)");
    assert_eq!(try_parse("(+ 1 2)").unwrap().to_string(), "(+ 1 2)");
}

#[test]
fn test_lisp_e2e_parse_failures() {
    assert_eq!(try_parse("(+ 1 2))"), Err(Error::FailedAtPos(9)));
    assert_eq!(try_parse("a b"), Err(Error::MultipleAtoms));
    assert_eq!(run(&["a b"]), "(badexpr multiple-atoms)");
}

#[test]
fn test_lisp_e2e_canonical_rendering() {
    let first = parse("  ( a   (b\tc)\n () )").to_string();
    assert_eq!(first, "(a (b c) ())");
    assert_eq!(parse(&first).to_string(), first);
}

#[test]
fn test_lisp_e2e_equal() {
    let a = parse("a");
    let wrapped = parse("(a)");
    assert!(equal(&a, &a));
    assert!(equal(&wrapped, &parse("( a )")));
    assert!(!equal(&a, &wrapped));
    assert!(!equal(&wrapped, &a));
}

#[test]
fn test_lisp_e2e_recursion_limit() {
    let mut evaluator = LispEvaluator::with_config(EvalConfig::default().with_max_depth(100));
    evaluator.eval_str("(def loop (lambda (x) (loop x)))");

    let result = evaluator.try_eval(&parse("(loop 1)"));
    assert_eq!(result, Err(Error::RecursionLimit { limit: 100 }));

    // the evaluator is still usable afterwards
    assert_eq!(evaluator.eval_str("(+ 2 2)").to_string(), "4");
}
