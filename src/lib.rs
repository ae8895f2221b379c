//! # ParseComb - Backtracking Parser Combinators
//!
//! Parsers are values implementing [`Parser`]: a function from a
//! [`TextCursor`] to an [`Outcome`]. Besides success or failure an outcome
//! records whether input was consumed, which is what drives the library:
//!
//! - **Committed choice**: [`or_else`] only tries its second alternative when
//!   the first consumed nothing; wrap with [`attempt`] to backtrack further
//! - **Merged diagnostics**: alternatives that fail without consuming pool
//!   their expectations, so errors read `expected digit or letter`
//! - **Guaranteed termination**: [`many1`] and [`fix`] run on fuel bounded by
//!   the remaining input, so grammars that loop without consuming still stop
//! - **Borrowed output**: text recognizers return slices of the input
//!
//! ```
//! use parsecomb::{AndExt, parse_to_end, sep_by1};
//! use parsecomb::text::{char, lexeme, number};
//!
//! let pair = lexeme(number()).skip(lexeme(char('x'))).and(lexeme(number()));
//! let sizes = sep_by1(pair, lexeme(char(',')));
//!
//! assert_eq!(parse_to_end(&sizes, "3 x 4, 10x2").unwrap(), vec![(3, 4), (10, 2)]);
//! assert!(parse_to_end(&sizes, "3 x 4,").is_err());
//! ```

pub mod and;
pub mod attempt;
pub mod bind;
pub mod cursor;
pub mod error;
pub mod fix;
pub mod introspect;
pub mod label;
pub mod lookahead;
pub mod many;
pub mod map;
pub mod or;
pub mod outcome;
pub mod parser;
pub mod pure;
pub mod run;
pub mod separated_list;
pub mod text;

pub use and::{And, AndExt, Skip, Then, and, skip, then};
pub use attempt::{Attempt, AttemptExt, attempt};
pub use bind::{Bind, BindExt, bind, chain};
pub use cursor::{TextCursor, line_column};
pub use error::{Message, ParseError, join_expected};
pub use fix::{Fix, Recurse, fix};
pub use introspect::{end_of_input, ensure, position, remaining, rest};
pub use label::{Label, LabelExt, label};
pub use lookahead::{Lookahead, LookaheadExt, lookahead};
pub use many::{Many, Many1, many, many1};
pub use map::{Map, MapExt, map};
pub use or::{OrElse, OrExt, or_else};
pub use outcome::Outcome;
pub use parser::{BoxedParser, FnParser, Parser, boxed, from_fn};
pub use pure::{DefaultParser, Fail, Pure, default, fail, pure};
pub use run::{Runner, parse_to_end, parse_with_remainder, run};
pub use separated_list::{SepBy, SepBy1, sep_by, sep_by1};
