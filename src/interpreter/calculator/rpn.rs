use crate::{
    error::EvalError,
    interpreter::calculator::{
        core::EvalResult,
        term::{Operator, Term},
    },
};

/// Folds unary signs into the numbers they precede.
///
/// A `+` or `-` is unary when it starts the expression or follows an operator
/// or an opening bracket, and is directly followed by a number. Unary `+` is
/// dropped; unary `-` negates the number. Any other sign stays binary.
fn fold_signs(terms: &[Term]) -> Vec<Term> {
    let mut folded = Vec::with_capacity(terms.len());
    let mut index = 0;

    while index < terms.len() {
        let term = terms[index];
        let follows_operand = index > 0
                              && !matches!(terms[index - 1],
                                           Term::Operator(_) | Term::OpenBracket);

        if let Term::Operator(op) = term
           && op.is_sign()
           && !follows_operand
           && let Some(&Term::Number(value)) = terms.get(index + 1)
        {
            folded.push(Term::Number(if op == Operator::Subtract { -value } else { value }));
            index += 2;
            continue;
        }

        folded.push(term);
        index += 1;
    }

    folded
}

/// Returns `true` if `top` must leave the operator stack before `incoming` is
/// pushed.
const fn must_pop(top: Operator, incoming: Operator) -> bool {
    if incoming.is_right_associative() {
        top.priority() > incoming.priority()
    } else {
        top.priority() >= incoming.priority()
    }
}

/// Converts an infix term sequence to reverse Polish notation.
///
/// Uses the shunting-yard algorithm. Priorities are `+ -` < `* /` < `^`; `^`
/// is right associative, the rest are left associative. Unary signs are folded
/// into the following number first.
///
/// # Errors
/// Returns [`EvalError::UnbalancedParentheses`] if a `)` has no matching `(`
/// or a `(` is never closed.
///
/// # Example
/// ```
/// use seqlang::interpreter::calculator::{
///     Operator, Term,
///     rpn::to_postfix,
/// };
///
/// // 700 - 200 * 3
/// let infix = [Term::Number(700.0),
///              Term::Operator(Operator::Subtract),
///              Term::Number(200.0),
///              Term::Operator(Operator::Multiply),
///              Term::Number(3.0)];
///
/// let postfix = to_postfix(&infix).unwrap();
/// let text = postfix.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
/// assert_eq!(text, "700 200 3 * -");
/// ```
pub fn to_postfix(terms: &[Term]) -> EvalResult<Vec<Term>> {
    let mut output = Vec::with_capacity(terms.len());
    let mut operators: Vec<Term> = Vec::new();

    for term in fold_signs(terms) {
        match term {
            Term::Number(_) => output.push(term),
            Term::OpenBracket => operators.push(term),
            Term::CloseBracket => loop {
                match operators.pop() {
                    Some(Term::OpenBracket) => break,
                    Some(op) => output.push(op),
                    None => return Err(EvalError::UnbalancedParentheses),
                }
            },
            Term::Operator(incoming) => {
                while let Some(&Term::Operator(top)) = operators.last()
                      && must_pop(top, incoming)
                {
                    output.push(Term::Operator(top));
                    operators.pop();
                }
                operators.push(term);
            },
        }
    }

    while let Some(term) = operators.pop() {
        if term == Term::OpenBracket {
            return Err(EvalError::UnbalancedParentheses);
        }
        output.push(term);
    }

    Ok(output)
}

/// Evaluates a postfix term sequence on an operand stack.
///
/// Each operator pops `b`, then `a`, and pushes `a op b`.
///
/// # Errors
/// - [`EvalError::MissingOperand`] if an operator finds fewer than two
///   operands.
/// - [`EvalError::InvalidExpression`] if the stack does not end with exactly
///   one value, or a bracket is found.
/// - [`EvalError::NonFinite`] if the result is `NaN` or infinite.
pub fn evaluate_postfix(postfix: &[Term]) -> EvalResult<f64> {
    let mut operands = Vec::with_capacity(postfix.len());

    for term in postfix {
        match *term {
            Term::Number(value) => operands.push(value),
            Term::Operator(op) => {
                let missing = || EvalError::MissingOperand { operator: op.symbol() };
                let b = operands.pop().ok_or_else(missing)?;
                let a = operands.pop().ok_or_else(missing)?;
                operands.push(op.apply(a, b));
            },
            Term::OpenBracket | Term::CloseBracket => return Err(EvalError::InvalidExpression),
        }
    }

    let &[value] = operands.as_slice() else {
        return Err(EvalError::InvalidExpression);
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite { value })
    }
}
