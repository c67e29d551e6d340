#[derive(Debug, Clone)]
pub struct Authorize;

#[derive(Debug, Clone)]
pub struct Capture;

#[derive(Debug, Clone)]
pub struct Refund;

#[derive(Debug, Clone)]
pub struct Void;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum FlowName {
    Authorize,
    Capture,
    Refund,
    Void,
    Purchase,
}
