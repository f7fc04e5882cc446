/// Declares which fields of a struct are decoded, and under which key.
///
/// Generates an implementation of [`Decode`](crate::Decode) that registers
/// the listed fields in order, plus a [`Target`](crate::Target)
/// implementation for the struct itself that rejects decoding by value.
/// Fields that are not listed are never touched.
///
/// A field marked `as nested` is a struct of its own; flat querystrings
/// cannot describe it, so a query that mentions its key fails with
/// [`Error::Unsupported`](crate::Error::Unsupported).
///
/// ```
/// #[derive(Debug, Default, PartialEq)]
/// struct Filter {
///     ids: Vec<u64>,
///     limit: Option<u32>,
///     archived: bool,
/// }
///
/// qs_fields::decode_fields! {
///     Filter {
///         ids => "id",
///         limit => "limit",
///         archived => "archived",
///     }
/// }
///
/// let filter: Filter = qs_fields::from_str("id=1&id=7&archived").unwrap();
/// assert_eq!(
///     filter,
///     Filter { ids: vec![1, 7], limit: None, archived: true }
/// );
///
/// // passing the struct itself is refused
/// let err = qs_fields::decode("id=1", Filter::default()).unwrap_err();
/// assert!(matches!(err, qs_fields::Error::InvalidTarget(_)));
/// ```
#[macro_export]
macro_rules! decode_fields {
    (@register $this:ident $fields:ident $field:ident $key:literal) => {
        $fields.field($key, &mut $this.$field)?
    };

    (@register $this:ident $fields:ident $field:ident $key:literal nested) => {
        $fields.nested($key, &mut $this.$field)?
    };

    (
        $ty:ty {
            $( $field:ident => $key:literal $(as $kind:ident)? ),* $(,)?
        }
    ) => {
        impl $crate::Decode for $ty {
            fn decode_fields(
                &mut self,
                fields: &mut $crate::Fields<'_>,
            ) -> $crate::Result<()> {
                let this = self;
                $( $crate::decode_fields!(@register this fields $field $key $($kind)?); )*
                Ok(())
            }
        }

        impl $crate::Target for $ty {
            fn resolve(
                &mut self,
            ) -> ::std::result::Result<&mut dyn $crate::Decode, $crate::InvalidTarget> {
                Err($crate::InvalidTarget::NotReference(
                    ::std::any::type_name::<$ty>(),
                ))
            }
        }
    };
}
