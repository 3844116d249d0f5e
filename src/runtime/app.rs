use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::commands::Cmd;
use crate::messages::{Msg, VerificationMsg};
use crate::model::AppModel;
use crate::update::update;
use crate::verification::FormalChecker;

/// Owns the model and executes commands.
///
/// The model is only touched on the thread that owns the runtime. Remote calls
/// run on short-lived worker threads that own nothing but the request and a
/// sender; their results re-enter through [`Runtime::process_async_messages`].
pub struct Runtime {
    pub model: AppModel,
    checker: Arc<dyn FormalChecker>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl Runtime {
    pub fn new(model: AppModel, checker: Arc<dyn FormalChecker>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            checker,
            msg_tx,
            msg_rx,
        }
    }

    /// Feed one message through `update` and run the resulting command.
    ///
    /// Returns the command's redraw hint, or `None` if the message was not
    /// handled (a keystroke the host should insert itself).
    pub fn dispatch(&mut self, msg: Msg) -> Option<bool> {
        let cmd = update(&mut self.model, msg)?;
        let needs_redraw = cmd.needs_redraw();
        self.process_cmd(cmd);
        Some(needs_redraw)
    }

    fn process_cmd(&self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {
                // Handled by the host re-rendering
            }
            Cmd::Verify(request) => {
                let tx = self.msg_tx.clone();
                let checker = Arc::clone(&self.checker);
                std::thread::spawn(move || {
                    let id = request.id;
                    let msg = match checker.check(&request.qualified) {
                        Ok(report) => VerificationMsg::Completed { id, report },
                        Err(error) => VerificationMsg::Failed { id, error },
                    };
                    let _ = tx.send(Msg::Verification(msg));
                });
            }
            Cmd::ResolveReferences(request) => {
                let tx = self.msg_tx.clone();
                let checker = Arc::clone(&self.checker);
                std::thread::spawn(move || {
                    let id = request.id;
                    let msg = match checker.resolve_references(&request.text) {
                        Ok(payload) => VerificationMsg::ReferencesResolved { id, payload },
                        Err(error) => VerificationMsg::ReferencesFailed { id, error },
                    };
                    let _ = tx.send(Msg::Verification(msg));
                });
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    /// Process pending async messages from the channel
    pub fn process_async_messages(&mut self) -> bool {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = update(&mut self.model, msg) {
                if cmd.needs_redraw() {
                    needs_redraw = true;
                }
                self.process_cmd(cmd);
            }
        }
        needs_redraw
    }

    /// Block until no remote call is outstanding or `timeout` passes.
    ///
    /// Returns true if the model went idle.
    pub fn wait_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.model.has_pending_requests() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.msg_rx.recv_timeout(remaining) {
                Ok(msg) => {
                    if let Some(cmd) = update(&mut self.model, msg) {
                        self.process_cmd(cmd);
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    tracing::warn!(
                        target: "verification",
                        ?timeout,
                        "timed out waiting for checker"
                    );
                    return false;
                }
                // The runtime holds a sender, so this only happens during teardown
                Err(RecvTimeoutError::Disconnected) => return false,
            }
        }
        true
    }
}
