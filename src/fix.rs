use crate::cursor::TextCursor;
use crate::error::Message;
use crate::outcome::Outcome;
use crate::parser::{BoxedParser, Parser};
use std::rc::Rc;
use tracing::trace;

type Body<'code, T> = Rc<dyn Fn(Recurse<'code, T>) -> BoxedParser<'code, T> + 'code>;

/// Parser for a self-referential grammar
///
/// The grammar is given as a function from "the grammar itself" to a parser.
/// At parse time the function is unfolded on demand, at most the number of
/// characters remaining plus one times, counted from where the `Fix` parser
/// was started. Past that depth the self-reference fails without consuming,
/// so a grammar that recurses without consuming still terminates.
///
/// Fuel bounds the number of unfoldings, not the stack. Every level of
/// nesting in the input is a level of native recursion, so input nested
/// hundreds of thousands of levels deep can overflow the thread's stack.
/// Run such inputs on a thread with a larger stack, or parse the repetitive
/// parts with [`many1`](crate::many::many1), which loops.
///
/// ```
/// use parsecomb::{fix, boxed, run};
/// use parsecomb::{AndExt, MapExt, OrExt};
/// use parsecomb::pure::pure;
/// use parsecomb::text::char;
///
/// // Depth of balanced parentheses
/// let depth = fix(|inner| {
///     boxed(char('(').then(inner).skip(char(')')).map(|d: u32| d + 1).or_else(pure(0)))
/// });
///
/// assert_eq!(run(&depth, "((()))").unwrap(), 3);
/// ```
pub struct Fix<'code, T> {
    body: Body<'code, T>,
}

impl<'code, T> Fix<'code, T> {
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(Recurse<'code, T>) -> BoxedParser<'code, T> + 'code,
    {
        Fix {
            body: Rc::new(body),
        }
    }
}

impl<'code, T> Clone for Fix<'code, T> {
    fn clone(&self) -> Self {
        Fix {
            body: Rc::clone(&self.body),
        }
    }
}

impl<'code, T> Parser<'code> for Fix<'code, T> {
    type Output = T;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        Recurse {
            body: Rc::clone(&self.body),
            fuel: cursor.remaining_count() + 1,
        }
        .parse(cursor)
    }
}

/// Convenience function to create a Fix parser
pub fn fix<'code, T, F>(body: F) -> Fix<'code, T>
where
    F: Fn(Recurse<'code, T>) -> BoxedParser<'code, T> + 'code,
{
    Fix::new(body)
}

/// The self-reference handed to a [`Fix`] body
///
/// Parsing with it unfolds the body one more level, spending one unit of the
/// fuel the enclosing `Fix` started with.
pub struct Recurse<'code, T> {
    body: Body<'code, T>,
    fuel: usize,
}

impl<'code, T> Clone for Recurse<'code, T> {
    fn clone(&self) -> Self {
        Recurse {
            body: Rc::clone(&self.body),
            fuel: self.fuel,
        }
    }
}

impl<'code, T> Parser<'code> for Recurse<'code, T> {
    type Output = T;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        if self.fuel == 0 {
            trace!(offset = cursor.offset(), "recursion out of fuel");
            return Outcome::unconsumed(Message::at(cursor.offset()));
        }

        let unfolded = (self.body)(Recurse {
            body: Rc::clone(&self.body),
            fuel: self.fuel - 1,
        });
        unfolded.parse(cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::many::many1;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::parser::boxed;
    use crate::pure::pure;
    use crate::text::character::{alpha, char};

    #[test]
    fn test_fix_nested_parentheses() {
        let depth = fix(|inner| {
            boxed(
                char('(')
                    .then(inner)
                    .skip(char(')'))
                    .map(|d: u32| d + 1)
                    .or_else(pure(0)),
            )
        });

        let (value, rest) = depth.parse(TextCursor::new("((()))")).into_result().unwrap();
        assert_eq!(value, 3);
        assert!(!rest.has_next());

        let (value, rest) = depth.parse(TextCursor::new("x")).into_result().unwrap();
        assert_eq!(value, 0);
        assert_eq!(rest.offset(), 0);
    }

    #[test]
    fn test_fix_unbalanced_is_consumed_failure() {
        let depth = fix(|inner| {
            boxed(
                char('(')
                    .then(inner)
                    .skip(char(')'))
                    .map(|d: u32| d + 1)
                    .or_else(pure(0)),
            )
        });

        let outcome = depth.parse(TextCursor::new("(()"));
        assert!(!outcome.is_success());
        assert!(outcome.is_consumed());
        assert_eq!(outcome.message().map(|m| m.pos), Some(3));
    }

    #[test]
    fn test_fix_bare_self_reference_fails() {
        let forever: Fix<'_, ()> = fix(|me| boxed(me));
        let cursor = TextCursor::new("abc");

        assert_eq!(
            forever.parse(cursor),
            Outcome::Failure {
                message: Message::at(0),
                consumed: false,
            }
        );
    }

    #[test]
    fn test_fix_non_consuming_recursion_is_bounded_by_input() {
        // Every unfolding adds one without consuming, so the depth reached is the fuel
        let count = fix(|me| boxed(me.map(|n: usize| n + 1).or_else(pure(0))));

        for input in ["", "a", "abcd"] {
            let cursor = TextCursor::new(input);
            match count.parse(cursor) {
                Outcome::EmptySuccess { value, .. } => assert_eq!(value, input.len()),
                other => panic!("unexpected outcome {:?}", other),
            }
        }
    }

    #[test]
    fn test_fix_list_of_words() {
        // word (',' list)?
        let list = fix(|rest| {
            boxed(
                many1(alpha())
                    .map(|chars| vec![chars.into_iter().collect::<String>()])
                    .and(char(',').then(rest).or_else(pure(Vec::new())))
                    .map(|(mut head, tail): (Vec<String>, Vec<String>)| {
                        head.extend(tail);
                        head
                    }),
            )
        });

        let (words, _) = list
            .parse(TextCursor::new("ab,cd,e"))
            .into_result()
            .unwrap();
        assert_eq!(words, vec!["ab", "cd", "e"]);
    }

    #[test]
    fn test_fix_deep_nesting() {
        let input = format!("{}{}", "(".repeat(200), ")".repeat(200));
        let depth = fix(|inner| {
            boxed(
                char('(')
                    .then(inner)
                    .skip(char(')'))
                    .map(|d: u32| d + 1)
                    .or_else(pure(0)),
            )
        });

        let (value, rest) = depth.parse(TextCursor::new(&input)).into_result().unwrap();
        assert_eq!(value, 200);
        assert!(!rest.has_next());
    }

    #[test]
    fn test_fix_clone_shares_body() {
        let depth = fix(|inner| boxed(char('[').then(inner).or_else(pure('.'))));
        let copy = depth.clone();
        let cursor = TextCursor::new("[[");

        assert_eq!(depth.parse(cursor), copy.parse(cursor));
    }
}
