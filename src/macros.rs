//! Enum helper macros
//!
//! These macros eliminate repetitive match code for keyword enums and for
//! the element payload variants. Identifier concatenation uses `paste`.

// =============================================================================
// Keyword enums
// =============================================================================

/// Define a fieldless enum whose variants map one-to-one onto SVG keywords
///
/// # Generated items
/// - the enum itself (`Debug, Clone, Copy, PartialEq, Eq, Hash`)
/// - `ALL` - every variant in declaration order
/// - `as_str(self) -> &'static str` - the keyword
/// - `from_keyword(&str) -> Option<Self>` - exact, case-sensitive lookup
/// - `Display`, writing the keyword
///
/// # Example
/// ```ignore
/// keyword_enum! {
///     pub enum FillRule {
///         NonZero => "nonzero",
///         EvenOdd => "evenodd",
///     }
/// }
/// ```
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $kw:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// SVG keyword for this variant
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $kw,)+
                }
            }

            /// Look up a variant by its exact keyword
            pub fn from_keyword(s: &str) -> Option<Self> {
                match s {
                    $($kw => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// =============================================================================
// ElementKind accessor generation
// =============================================================================

/// Generate is_xxx, as_xxx, as_xxx_mut methods for ElementKind
///
/// # Generated methods per variant:
/// - `is_xxx(&self) -> bool` - type check
/// - `as_xxx(&self) -> Option<&Payload>` - immutable accessor
/// - `as_xxx_mut(&mut self) -> Option<&mut Payload>` - mutable accessor
///
/// # Example
/// ```ignore
/// impl ElementKind {
///     // rect -> Rect, text_path -> TextPath
///     impl_kind_accessors!(rect, text_path);
/// }
/// ```
macro_rules! impl_kind_accessors {
    ($($variant:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Check if this is a " [<$variant:camel>] " payload"]
                pub fn [<is_ $variant>](&self) -> bool {
                    matches!(self, Self::[<$variant:camel>](_))
                }

                #[doc = "Get reference to the " [<$variant:camel>] " payload"]
                pub fn [<as_ $variant>](&self) -> Option<&[<$variant:camel>]> {
                    match self { Self::[<$variant:camel>](v) => Some(v), _ => None }
                }

                #[doc = "Get mutable reference to the " [<$variant:camel>] " payload"]
                pub fn [<as_ $variant _mut>](&mut self) -> Option<&mut [<$variant:camel>]> {
                    match self { Self::[<$variant:camel>](v) => Some(v), _ => None }
                }
            )*
        }
    };
}
