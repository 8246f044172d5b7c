/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs decimal arithmetic, resolves names through the symbol table and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Stores assignments and protects constant and function names.
/// - Reports runtime errors such as overflow or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a number, a name, an operator, a parenthesis
/// or a statement separator. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their source line.
/// - Reads decimal literals exactly, keeping their written scale.
/// - Stops at the first unrecognized character and reports it.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements, one statement at a time.
pub mod parser;
/// Ties lexing, parsing and evaluation together.
///
/// A `Session` owns the evaluation context and the result log and folds
/// statements into them left to right.
pub mod session;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: finite decimals, infinities and NaN.
/// - Formats values and bridges them to `f64` where a function needs it.
/// - Defines the `Outcome` entries of the result log.
pub mod value;
