//! Unit tests for gateway registration

#[cfg(test)]
mod tests {
    use crate::error::IpamError;
    use crate::test_utils::*;

    #[tokio::test]
    async fn register_stores_the_canonical_pair() {
        let (store, service) = test_service();

        let entry = service
            .register_gateway("10.0.0.0/24", "10.0.0.1")
            .await
            .unwrap();
        assert_eq!(entry.subnet, "10.0.0.0/24");
        assert_eq!(entry.gateway, "10.0.0.1");

        assert_eq!(
            store.raw("/anchor/gw/10.0.0.0/24").as_deref(),
            Some("10.0.0.0/24,10.0.0.1")
        );

        let listed = service.list_gateways().await.unwrap();
        assert_eq!(listed, vec![entry]);
    }

    #[tokio::test]
    async fn register_rejects_duplicate_subnet() {
        let (_store, service) = test_service();

        service
            .register_gateway("10.0.0.0/24", "10.0.0.1")
            .await
            .unwrap();
        let err = service
            .register_gateway("10.0.0.0/24", "10.0.0.254")
            .await
            .unwrap_err();
        assert!(matches!(err, IpamError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn register_rejects_gateway_outside_subnet() {
        let (store, service) = test_service();

        let err = service
            .register_gateway("10.0.0.0/24", "192.168.0.1")
            .await
            .unwrap_err();
        assert!(matches!(err, IpamError::NotInSubnet { .. }));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn register_rejects_malformed_input() {
        let (_store, service) = test_service();

        // Not CIDR at all.
        assert!(matches!(
            service.register_gateway("10.0.0.0", "10.0.0.1").await,
            Err(IpamError::Format(_))
        ));
        // Host bits set: strict network parse.
        assert!(matches!(
            service.register_gateway("10.0.0.1/24", "10.0.0.1").await,
            Err(IpamError::Format(_))
        ));
        // Malformed gateway address.
        assert!(matches!(
            service.register_gateway("10.0.0.0/24", "gateway").await,
            Err(IpamError::Format(_))
        ));
    }

    #[tokio::test]
    async fn unregister_removes_the_entry() {
        let (store, service) = test_service();

        service
            .register_gateway("10.0.0.0/24", "10.0.0.1")
            .await
            .unwrap();
        let removed = service.unregister_gateway("10.0.0.0/24").await.unwrap();
        assert_eq!(removed, "10.0.0.0/24");
        assert!(store.is_empty());
        assert!(service.list_gateways().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unregister_of_unknown_subnet_fails() {
        let (_store, service) = test_service();

        // Nothing registered at all.
        let err = service.unregister_gateway("10.0.0.0/24").await.unwrap_err();
        assert!(matches!(err, IpamError::NotExist(_)));

        service
            .register_gateway("10.0.0.0/24", "10.0.0.1")
            .await
            .unwrap();
        let err = service.unregister_gateway("10.0.1.0/24").await.unwrap_err();
        assert!(matches!(err, IpamError::NotExist(_)));
    }

    #[tokio::test]
    async fn list_skips_empty_and_malformed_entries() {
        let (store, service) = test_service();

        service
            .register_gateway("10.0.0.0/24", "10.0.0.1")
            .await
            .unwrap();
        store.seed("/anchor/gw/10.0.1.0/24", "");
        store.seed("/anchor/gw/10.0.2.0/24", "10.0.2.0/24");

        let listed = service.list_gateways().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].subnet, "10.0.0.0/24");
    }
}
