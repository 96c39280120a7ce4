//! Command values produced by the command parser.

/// The two verbs the bot acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Post the body as a new message in the target channel.
    Announce,
    /// Replace the content of the author's last announcement with the body.
    Edit,
}

/// A well-formed, authorized command.
///
/// Built by the parser and consumed right away by the dispatcher. Any non-empty
/// command word parses; only `announce` and `edit` map to a [`Verb`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Lower-cased command word from the header line.
    pub command: String,
    /// Everything after the first newline, verbatim.
    pub body: String,
}

impl ParsedCommand {
    /// Returns the verb this command maps to, if any.
    ///
    /// # Returns
    /// - `Some(Verb)` - `announce` or `edit`
    /// - `None` - Any other command word; the dispatcher ignores these silently
    pub fn verb(&self) -> Option<Verb> {
        match self.command.as_str() {
            "announce" => Some(Verb::Announce),
            "edit" => Some(Verb::Edit),
            _ => None,
        }
    }
}
