//! Mapping between `digkit_domain::RecordType` and `hickory_proto::rr::RecordType`

use digkit_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

/// Bidirectional mapper between domain and hickory record types
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::ANY => HickoryRecordType::ANY,
            RecordType::Other(code) => HickoryRecordType::from(*code),
        }
    }

    /// Convert hickory RecordType → domain RecordType (for incoming queries)
    ///
    /// Types the responder has no rules for are kept as their wire code.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        match hickory_type {
            HickoryRecordType::A => RecordType::A,
            HickoryRecordType::AAAA => RecordType::AAAA,
            HickoryRecordType::TXT => RecordType::TXT,
            HickoryRecordType::ANY => RecordType::ANY,
            other => RecordType::Other(u16::from(other)),
        }
    }
}
