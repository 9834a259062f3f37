/// Generate a client method that dispatches one action and returns the new
/// snapshot, with tracing and error mapping through the client's
/// [`StoreHandle`](store_actor::StoreHandle) implementation.
///
/// ```rust,ignore
/// dispatch_method!(CartClient, Cart => fn clear() => CartAction::Clear);
/// ```
macro_rules! dispatch_method {
    (
        $client:ty, $state:ty =>
        $(#[$meta:meta])*
        fn $method:ident($($param:ident: $param_type:ty),*) => $action:expr
    ) => {
        impl $client {
            $(#[$meta])*
            #[tracing::instrument(skip(self))]
            pub async fn $method(
                &self,
                $($param: $param_type),*
            ) -> Result<
                store_actor::Snapshot<$state>,
                <Self as store_actor::StoreHandle<$state>>::Error,
            > {
                tracing::debug!("Sending request");
                <Self as store_actor::StoreHandle<$state>>::inner(self)
                    .dispatch($action)
                    .await
                    .map_err(<Self as store_actor::StoreHandle<$state>>::map_error)
            }
        }
    };
}
