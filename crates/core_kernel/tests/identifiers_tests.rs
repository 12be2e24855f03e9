//! Unit tests for the Identifiers module
//!
//! Tests cover identifier creation, parsing, conversion, and display.

use core_kernel::{DonorId, CharityId, DonationId};
use uuid::Uuid;

mod donor_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        assert_ne!(DonorId::new(), DonorId::new());
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = DonorId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = DonorId::new_v7();
        let uuid1: Uuid = id1.into();
        let uuid2: Uuid = id2.into();
        assert!(uuid1 < uuid2);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(DonorId::prefix(), "DNR");
    }

    #[test]
    fn test_parse_with_and_without_prefix() {
        let uuid = Uuid::new_v4();
        let id = DonorId::from(uuid);

        let with_prefix: DonorId = format!("DNR-{}", uuid).parse().unwrap();
        let without_prefix: DonorId = uuid.to_string().parse().unwrap();
        assert_eq!(with_prefix, id);
        assert_eq!(without_prefix, id);
    }

    #[test]
    fn test_parse_invalid() {
        assert!("DNR-not-a-uuid".parse::<DonorId>().is_err());
    }
}

mod charity_id_tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let id = CharityId::new();
        let display = id.to_string();
        assert!(display.starts_with("CHR-"));
        assert_eq!(display.len(), "CHR-".len() + 36);
    }

    #[test]
    fn test_serde_is_transparent() {
        let uuid = Uuid::new_v4();
        let id = CharityId::from(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }
}

mod donation_id_tests {
    use super::*;

    #[test]
    fn test_as_uuid() {
        let uuid = Uuid::new_v4();
        let id = DonationId::from(uuid);
        assert_eq!(*id.as_uuid(), uuid);
        assert_eq!(DonationId::prefix(), "DON");
    }
}
