pub(crate) mod fingerprint;
pub(crate) mod ops;
pub(crate) mod sequencer;
pub(crate) mod stage;
