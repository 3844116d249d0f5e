//! Side effects returned by `update` and executed by the runtime

use crate::verification::{ReferenceRequest, VerificationRequest};

/// Side effects requested by `update`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    #[default]
    None,
    /// State changed; the host should re-render
    Redraw,
    /// Run a check on a worker; the result comes back as `VerificationMsg`
    Verify(VerificationRequest),
    /// Resolve references on a worker
    ResolveReferences(ReferenceRequest),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Whether the host should re-render
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Pending indicators change as soon as a request is issued
            Cmd::Verify(_) | Cmd::ResolveReferences(_) => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Whether this command starts remote work
    pub fn is_remote(&self) -> bool {
        match self {
            Cmd::Verify(_) | Cmd::ResolveReferences(_) => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.is_remote()),
            Cmd::None | Cmd::Redraw => false,
        }
    }
}
