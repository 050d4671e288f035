/// Build a validated [`DeciderChain`](crate::DeciderChain) from decider names.
///
/// ```
/// let chain = entity_access::chain![GrantIfAdmin, DenyIfInTrash, Deny].unwrap();
/// assert_eq!(chain.len(), 3);
/// ```
#[macro_export]
macro_rules! chain {
    ( $( $decider:ident ),+ $(,)? ) => {
        $crate::DeciderChain::builder()
            $( .decider($crate::Decider::$decider) )+
            .build()
    };
}
