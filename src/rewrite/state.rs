/// Whether default text lines are forwarded to output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmitState {
    #[default]
    Emit,
    Suppressed,
}

/// State maintained during a rewrite run.
#[derive(Debug, Clone, Default)]
pub struct ProcessorState {
    pub emit: EmitState,
}

impl ProcessorState {
    pub fn new() -> Self {
        Self {
            emit: EmitState::Emit,
        }
    }

    pub fn is_emitting(&self) -> bool {
        self.emit == EmitState::Emit
    }

    /// Stop forwarding text lines (entering a `<div>` block).
    pub fn suppress(&mut self) {
        if self.is_emitting() {
            tracing::debug!("Emit state: EMIT -> SUPPRESSED");
        }
        self.emit = EmitState::Suppressed;
    }

    /// Resume forwarding text lines (a dataframe table opened).
    pub fn resume(&mut self) {
        if !self.is_emitting() {
            tracing::debug!("Emit state: SUPPRESSED -> EMIT");
        }
        self.emit = EmitState::Emit;
    }
}
