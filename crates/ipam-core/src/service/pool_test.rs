//! Unit tests for tenant pool operations

#[cfg(test)]
mod tests {
    use crate::error::IpamError;
    use crate::test_utils::*;

    #[tokio::test]
    async fn reserve_creates_pool_in_order() {
        let (store, service) = test_service();

        service
            .reserve_range("team-a", "10.0.0.1", "10.0.0.3")
            .await
            .unwrap();

        assert_eq!(
            store.raw("/anchor/user/team-a").as_deref(),
            Some("10.0.0.1,10.0.0.2,10.0.0.3")
        );
    }

    #[tokio::test]
    async fn reserve_appends_to_existing_pool() {
        let (store, service) = test_service();

        service
            .reserve_range("team-a", "10.0.0.1", "10.0.0.2")
            .await
            .unwrap();
        service
            .reserve_range("team-a", "10.0.0.10", "10.0.0.11")
            .await
            .unwrap();

        assert_eq!(
            store.raw("/anchor/user/team-a").as_deref(),
            Some("10.0.0.1,10.0.0.2,10.0.0.10,10.0.0.11")
        );
    }

    #[tokio::test]
    async fn reserve_rejects_cross_tenant_overlap() {
        let (_store, service) = test_service();

        service
            .reserve_range("team-a", "10.0.0.1", "10.0.0.3")
            .await
            .unwrap();

        // Identical range for another tenant.
        let err = service
            .reserve_range("team-b", "10.0.0.1", "10.0.0.3")
            .await
            .unwrap_err();
        assert!(matches!(err, IpamError::AlreadyExists(_)));

        // Partial overlap is enough to reject.
        let err = service
            .reserve_range("team-b", "10.0.0.3", "10.0.0.5")
            .await
            .unwrap_err();
        assert!(matches!(err, IpamError::AlreadyExists(_)));

        // The failed attempts wrote nothing.
        assert!(service.tenant_pool("team-b").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn reserve_propagates_expansion_failures() {
        let (store, service) = test_service();

        assert!(matches!(
            service.reserve_range("team-a", "10.0.0", "10.0.0.3").await,
            Err(IpamError::Format(_))
        ));
        assert!(matches!(
            service.reserve_range("team-a", "10.0.0.5", "10.0.1.5").await,
            Err(IpamError::RangeTooLarge { .. })
        ));
        assert!(matches!(
            service.reserve_range("team-a", "10.0.0.9", "10.0.0.3").await,
            Err(IpamError::RangeOrder { .. })
        ));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn release_keeps_remaining_addresses() {
        let (store, service) = test_service();

        service
            .reserve_range("team-a", "10.0.0.1", "10.0.0.3")
            .await
            .unwrap();
        service
            .release_addresses("team-a", &["10.0.0.2".to_string()])
            .await
            .unwrap();

        assert_eq!(
            store.raw("/anchor/user/team-a").as_deref(),
            Some("10.0.0.1,10.0.0.3")
        );
    }

    #[tokio::test]
    async fn releasing_last_addresses_removes_the_key() {
        let (store, service) = test_service();

        service
            .reserve_range("team-a", "10.0.0.1", "10.0.0.3")
            .await
            .unwrap();
        service
            .release_addresses("team-a", &["10.0.0.2".to_string()])
            .await
            .unwrap();
        service
            .release_addresses(
                "team-a",
                &["10.0.0.1".to_string(), "10.0.0.3".to_string()],
            )
            .await
            .unwrap();

        assert_eq!(store.raw("/anchor/user/team-a"), None);
        assert!(service.tenant_pool("team-a").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn release_of_unreserved_addresses_fails() {
        let (_store, service) = test_service();

        service
            .reserve_range("team-a", "10.0.0.1", "10.0.0.3")
            .await
            .unwrap();

        let err = service
            .release_addresses("team-a", &["10.9.9.9".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, IpamError::NotExist(_)));
    }

    #[tokio::test]
    async fn release_of_foreign_addresses_fails() {
        let (_store, service) = test_service();

        service
            .reserve_range("team-a", "10.0.0.1", "10.0.0.3")
            .await
            .unwrap();
        service
            .reserve_range("team-b", "10.0.0.10", "10.0.0.12")
            .await
            .unwrap();

        // team-b owns a pool, but none of the requested addresses.
        let err = service
            .release_addresses("team-b", &["10.0.0.1".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, IpamError::NotBelongToTenant(_)));

        // team-c owns no pool at all.
        let err = service
            .release_addresses("team-c", &["10.0.0.1".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, IpamError::NotBelongToTenant(_)));
    }

    #[tokio::test]
    async fn tenant_pool_absent_is_none() {
        let (_store, service) = test_service();
        assert!(service.tenant_pool("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn concurrent_reserves_for_different_tenants_both_land() {
        let (_store, service) = test_service();

        let a = {
            let service = service.clone();
            tokio::spawn(async move { service.reserve_range("team-a", "10.0.0.1", "10.0.0.50").await })
        };
        let b = {
            let service = service.clone();
            tokio::spawn(async move { service.reserve_range("team-b", "10.0.1.1", "10.0.1.50").await })
        };

        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        assert_eq!(service.tenant_pool("team-a").await.unwrap().unwrap().len(), 50);
        assert_eq!(service.tenant_pool("team-b").await.unwrap().unwrap().len(), 50);
    }
}
