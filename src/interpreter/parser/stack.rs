use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::{Call, Token},
        operator::{Associativity, Function, Operator, UNARY_MINUS_PRECEDENCE},
        parser::core::ParseResult,
    },
};

/// An entry waiting on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::interpreter::parser) enum Pending {
    Binary(Operator),
    Negate,
    Function(Function),
    /// An open parenthesis. `call` is set when it opens the argument list of
    /// the function directly below it.
    Group {
        call:       bool,
        separators: usize,
    },
}

impl Pending {
    /// Binding strength when the entry is an operator, `None` for functions
    /// and parentheses.
    const fn precedence(self) -> Option<u8> {
        match self {
            Self::Binary(op) => Some(op.precedence()),
            Self::Negate => Some(UNARY_MINUS_PRECEDENCE),
            Self::Function(_) | Self::Group { .. } => None,
        }
    }
}

/// The auxiliary stack of the shunting-yard conversion together with the
/// postfix output it flushes into.
#[derive(Debug, Default)]
pub(in crate::interpreter::parser) struct OperatorStack {
    entries: Vec<Pending>,
    output:  Vec<Token>,
}

impl OperatorStack {
    pub fn emit(&mut self, token: Token) {
        self.output.push(token);
    }

    pub fn push_function(&mut self, function: Function) {
        self.entries.push(Pending::Function(function));
    }

    pub fn push_negate(&mut self) {
        self.entries.push(Pending::Negate);
    }

    pub fn open(&mut self, call: bool) {
        self.entries.push(Pending::Group { call,
                                           separators: 0 });
    }

    /// Pushes a binary operator after flushing every stacked operator that
    /// binds at least as tightly (strictly tighter for right-associative
    /// operators).
    pub fn push_binary(&mut self, op: Operator) {
        while let Some(&top) = self.entries.last()
              && let Some(top_precedence) = top.precedence()
        {
            let flush = match op.associativity() {
                Associativity::Left => op.precedence() <= top_precedence,
                Associativity::Right => op.precedence() < top_precedence,
            };
            if !flush {
                break;
            }
            self.entries.pop();
            self.flush(top);
        }
        self.entries.push(Pending::Binary(op));
    }

    /// Handles `,` by flushing the current argument.
    ///
    /// # Errors
    /// `MisplacedSeparator` when there is no enclosing call.
    pub fn separate(&mut self) -> ParseResult<()> {
        loop {
            match self.entries.last() {
                Some(Pending::Group { call: true, .. }) => break,
                None | Some(Pending::Group { call: false, .. }) => {
                    return Err(SyntaxError::MisplacedSeparator);
                },
                Some(_) => {},
            }
            if let Some(entry) = self.entries.pop() {
                self.flush(entry);
            }
        }
        if let Some(Pending::Group { separators, .. }) = self.entries.last_mut() {
            *separators += 1;
        }
        Ok(())
    }

    /// Handles `)` by flushing back to the matching `(`. When the group was a
    /// call, the function below it is emitted with its argument count.
    ///
    /// `empty` tells whether the group closes right after it opened.
    ///
    /// # Errors
    /// `UnbalancedParentheses` when no `(` is open.
    pub fn close(&mut self, empty: bool) -> ParseResult<()> {
        loop {
            match self.entries.pop() {
                None => return Err(SyntaxError::UnbalancedParentheses),
                Some(Pending::Group { call, separators }) => {
                    if call && let Some(Pending::Function(function)) = self.entries.pop() {
                        let args = if empty { 0 } else { separators + 1 };
                        self.output.push(Token::Call(Call::new(function, args)));
                    }
                    return Ok(());
                },
                Some(entry) => self.flush(entry),
            }
        }
    }

    /// Drains the stack and returns the finished postfix sequence.
    ///
    /// # Errors
    /// `UnbalancedParentheses` when a `(` is still open.
    pub fn finish(mut self) -> ParseResult<Vec<Token>> {
        while let Some(entry) = self.entries.pop() {
            match entry {
                Pending::Group { .. } | Pending::Function(_) => {
                    return Err(SyntaxError::UnbalancedParentheses);
                },
                _ => self.flush(entry),
            }
        }
        Ok(self.output)
    }

    fn flush(&mut self, entry: Pending) {
        match entry {
            Pending::Binary(op) => self.output.push(Token::Operator(op)),
            Pending::Negate => self.output.push(Token::UnaryMinus),
            Pending::Function(function) => {
                self.output.push(Token::Call(Call::new(function, function.arity())));
            },
            Pending::Group { .. } => {},
        }
    }
}
