/// A message kind the executor delivers, named by the method the receiving
/// application exposes and the event recorded on receipt.
pub trait MessageKind {
    const NAME: &'static str;
    /// ABI signature of the receiving application's entry point
    const RECEIVE_SIGNATURE: &'static str;
    const EVENT_SIGNATURE: &'static str;
}

/// Attested (VAA v1) message delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VaaV1;

impl MessageKind for VaaV1 {
    const NAME: &'static str = "vaa_v1";
    const RECEIVE_SIGNATURE: &'static str = "execute_vaa_v1(appl)void";
    const EVENT_SIGNATURE: &'static str = "VAAMessageReceived(byte[32],bool,byte[])";
}

/// Transfer manager (NTT v1) message delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NttV1;

impl MessageKind for NttV1 {
    const NAME: &'static str = "ntt_v1";
    const RECEIVE_SIGNATURE: &'static str = "receive_message(appl)void";
    const EVENT_SIGNATURE: &'static str = "NTTMessageReceived(byte[32],bool,byte[])";
}
