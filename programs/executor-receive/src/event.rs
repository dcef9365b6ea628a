use core::marker::PhantomData;

use executor_avm::{Arc4Value, Event};

use crate::kind::MessageKind;

/// Outcome of one delivery attempt, either validated on-ledger or reported
/// by the relay network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageReceived<K> {
    pub request_for_execution_id: [u8; 32],
    pub success: bool,
    /// Empty on success
    pub error_reason: Vec<u8>,
    kind: PhantomData<K>,
}

impl<K> MessageReceived<K> {
    pub fn succeeded(request_for_execution_id: [u8; 32]) -> Self {
        Self {
            request_for_execution_id,
            success: true,
            error_reason: Vec::new(),
            kind: PhantomData,
        }
    }

    pub fn failed(request_for_execution_id: [u8; 32], error_reason: &[u8]) -> Self {
        Self {
            request_for_execution_id,
            success: false,
            error_reason: error_reason.to_vec(),
            kind: PhantomData,
        }
    }
}

impl<K: MessageKind> Event for MessageReceived<K> {
    const SIGNATURE: &'static str = K::EVENT_SIGNATURE;

    fn fields(&self) -> Vec<Arc4Value<'_>> {
        vec![
            Arc4Value::Static(&self.request_for_execution_id),
            Arc4Value::Bool(self.success),
            Arc4Value::DynamicBytes(&self.error_reason),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{NttV1, VaaV1};
    use executor_avm::method_selector;

    #[test]
    fn test_success_log_layout() {
        let log = MessageReceived::<VaaV1>::succeeded([0x0A; 32]).to_log().unwrap();

        assert_eq!(
            &log[..4],
            &method_selector("VAAMessageReceived(byte[32],bool,byte[])")
        );
        assert_eq!(&log[4..36], &[0x0A; 32]);
        assert_eq!(log[36], 0x80);
        // offset of the reason: 32 + 1 + 2
        assert_eq!(&log[37..39], &[0x00, 0x23]);
        assert_eq!(&log[39..], &[0x00, 0x00]);
    }

    #[test]
    fn test_failure_log_carries_reason() {
        let log = MessageReceived::<NttV1>::failed([0x0B; 32], b"out of gas")
            .to_log()
            .unwrap();

        assert_eq!(
            &log[..4],
            &method_selector("NTTMessageReceived(byte[32],bool,byte[])")
        );
        assert_eq!(log[36], 0x00);
        assert_eq!(&log[39..41], &10u16.to_be_bytes());
        assert_eq!(&log[41..], b"out of gas");
    }
}
