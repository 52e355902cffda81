//! Declarative generation of API objects and their builders.

/// Declare an API object type, its builder and its JSON representation.
///
/// Two forms are accepted. `resource` declares a linkable type: bit 0 is the
/// link flag and the `id` (bit 1) and `href` (bit 2) fields are added
/// automatically, so declared fields start at bit 3. `object` declares a
/// plain type whose fields start at bit 0.
///
/// Each field line names the field, its `get_` accessor, whether the builder
/// setter takes the value itself (`value`) or a nested builder (`nested`),
/// the field type, the JSON member name and the presence bit:
///
/// ```
/// use ocm_base::object_type;
///
/// object_type! {
///     /// A thing with a name
///     resource Widget, WidgetBuilder {
///         kind: "Widget",
///         link_kind: "WidgetLink",
///         fields: {
///             /// Name of the widget
///             name, get_name: value String = "name" @ 3,
///         }
///     }
/// }
///
/// let widget = Widget::builder().id("123").name("gear").build().unwrap();
/// assert_eq!(widget.get_name(), Some("gear"));
/// assert_eq!(widget.kind(), "Widget");
/// ```
#[macro_export]
macro_rules! object_type {
    (
        @define
        meta: [$(#[$meta:meta])*],
        name: $name:ident,
        builder: $builder:ident,
        kind: $kind:literal,
        link_kind: $link_kind:expr,
        linkable: $linkable:ident,
        fields: {
            $(
                $(#[$fmeta:meta])*
                $field:ident, $getter:ident: $mode:ident $ty:ty = $json:literal @ $bit:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            fields: $crate::FieldSet,
            $( $field: $ty, )*
        }

        impl $name {
            /// Create a builder for this type.
            pub fn builder() -> $builder {
                $builder::default()
            }

            /// Kind of the object, taking the link flag into account.
            pub fn kind(&self) -> &'static str {
                match <Self as $crate::ObjectType>::LINK_KIND {
                    Some(link_kind) if self.fields.contains(0) => link_kind,
                    _ => <Self as $crate::ObjectType>::KIND,
                }
            }

            /// True if no attribute has a value. The link flag does not count.
            pub fn is_empty(&self) -> bool {
                let first = if <Self as $crate::ObjectType>::LINK_KIND.is_some() { 1 } else { 0 };
                self.fields.is_empty_from(first)
            }

            $crate::object_type!(@link_accessor $linkable);

            $(
                $(#[$fmeta])*
                pub fn $field(&self) -> <$ty as $crate::Attribute>::Ref<'_> {
                    $crate::Attribute::as_attribute(&self.$field)
                }

                #[doc = concat!("Value of the `", $json, "` attribute, `None` when it is not set.")]
                pub fn $getter(&self) -> Option<<$ty as $crate::Attribute>::Ref<'_>> {
                    if self.fields.contains($bit) {
                        Some($crate::Attribute::as_attribute(&self.$field))
                    } else {
                        None
                    }
                }
            )*
        }

        impl $crate::ObjectType for $name {
            const KIND: &'static str = $kind;
            const LINK_KIND: Option<&'static str> = $link_kind;
            const LIST_KIND: &'static str = concat!($kind, "List");
            const LIST_LINK_KIND: &'static str = concat!($kind, "ListLink");
        }

        impl $crate::Attribute for $name {
            type Ref<'a> = &'a $name;

            fn as_attribute(&self) -> Self::Ref<'_> {
                self
            }
        }

        impl $crate::Buildable for $name {
            type Builder = $builder;

            fn build_from(builder: &Self::Builder) -> Result<Self, $crate::BuildError> {
                builder.build()
            }

            fn to_builder(&self) -> Self::Builder {
                $builder::default().copy(self)
            }
        }

        #[doc = concat!("Builder for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Default)]
        pub struct $builder {
            fields: $crate::FieldSet,
            $( $field: <$ty as $crate::Buildable>::Builder, )*
        }

        impl $builder {
            /// Create an empty builder.
            pub fn new() -> Self {
                Self::default()
            }

            /// True if no attribute has been set. The link flag does not count.
            pub fn is_empty(&self) -> bool {
                let first = if <$name as $crate::ObjectType>::LINK_KIND.is_some() { 1 } else { 0 };
                self.fields.is_empty_from(first)
            }

            $crate::object_type!(@link_setter $linkable);

            $(
                $crate::object_type!(@setter $mode, [$(#[$fmeta])*], $field, $ty, $bit);
            )*

            /// Reset the builder so that it mirrors the given object.
            pub fn copy(mut self, object: &$name) -> Self {
                self.fields = object.fields.clone();
                $( self.$field = <$ty as $crate::Buildable>::to_builder(&object.$field); )*
                self
            }

            /// Build the object, failing on the first nested builder that fails.
            pub fn build(&self) -> Result<$name, $crate::BuildError> {
                if <$name as $crate::ObjectType>::LINK_KIND.is_some()
                    && self.fields.contains(0)
                    && !self.fields.contains(1)
                    && !self.fields.contains(2)
                {
                    return Err($crate::BuildError::LinkWithoutTarget {
                        kind: <$name as $crate::ObjectType>::KIND,
                    });
                }

                Ok($name {
                    fields: self.fields.clone(),
                    $(
                        $field: if self.fields.contains($bit) {
                            <$ty as $crate::Buildable>::build_from(&self.$field)?
                        } else {
                            Default::default()
                        },
                    )*
                })
            }
        }

        impl From<&$name> for $builder {
            fn from(object: &$name) -> Self {
                $builder::default().copy(object)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                use $crate::__private::serde::ser::SerializeMap;

                let mut map = serializer.serialize_map(None)?;
                if <Self as $crate::ObjectType>::LINK_KIND.is_some() {
                    map.serialize_entry("kind", self.kind())?;
                }
                $(
                    if self.fields.contains($bit) && !$crate::Attribute::is_blank(&self.$field) {
                        map.serialize_entry($json, &self.$field)?;
                    }
                )*
                map.end()
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                use $crate::__private::serde::de::{IgnoredAny, MapAccess, Visitor};

                struct ObjectVisitor;

                impl<'de> Visitor<'de> for ObjectVisitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                        f.write_str(concat!("a `", $kind, "` object"))
                    }

                    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
                    where
                        A: MapAccess<'de>,
                    {
                        let mut object = $name::default();
                        while let Some(key) = map.next_key::<String>()? {
                            if key == "kind" {
                                if let Some(link_kind) = <$name as $crate::ObjectType>::LINK_KIND {
                                    let kind: Option<String> = map.next_value()?;
                                    object.fields.set(0, kind.as_deref() == Some(link_kind));
                                    continue;
                                }
                            }
                            match key.as_str() {
                                $(
                                    $json => {
                                        if let Some(value) = map.next_value::<Option<$ty>>()? {
                                            object.$field = value;
                                            object.fields.insert($bit);
                                        }
                                    }
                                )*
                                _ => {
                                    map.next_value::<IgnoredAny>()?;
                                }
                            }
                        }
                        Ok(object)
                    }
                }

                deserializer.deserialize_map(ObjectVisitor)
            }
        }
    };

    (@link_accessor yes) => {
        /// True if this object is a link to the full object.
        pub fn link(&self) -> bool {
            self.fields.contains(0)
        }
    };
    (@link_accessor no) => {};

    (@link_setter yes) => {
        /// Mark the object as a link. A link needs an `id` or an `href` to build.
        pub fn link(mut self, value: bool) -> Self {
            self.fields.set(0, value);
            self
        }
    };
    (@link_setter no) => {};

    (@setter value, [$(#[$fmeta:meta])*], $field:ident, $ty:ty, $bit:literal) => {
        $(#[$fmeta])*
        pub fn $field(mut self, value: impl Into<$ty>) -> Self {
            self.$field = value.into();
            self.fields.insert($bit);
            self
        }
    };
    (@setter nested, [$(#[$fmeta:meta])*], $field:ident, $ty:ty, $bit:literal) => {
        $(#[$fmeta])*
        ///
        /// Passing `None` clears the attribute.
        pub fn $field(mut self, value: impl Into<Option<<$ty as $crate::Buildable>::Builder>>) -> Self {
            match value.into() {
                Some(builder) => {
                    self.$field = builder;
                    self.fields.insert($bit);
                }
                None => {
                    self.$field = Default::default();
                    self.fields.remove($bit);
                }
            }
            self
        }
    };

    (
        $(#[$meta:meta])*
        resource $name:ident, $builder:ident {
            kind: $kind:literal,
            link_kind: $link_kind:literal,
            fields: { $($body:tt)* }
        }
    ) => {
        $crate::object_type! {
            @define
            meta: [$(#[$meta])*],
            name: $name,
            builder: $builder,
            kind: $kind,
            link_kind: Some($link_kind),
            linkable: yes,
            fields: {
                /// Identifier of the object.
                id, get_id: value String = "id" @ 1,
                /// Self link of the object.
                href, get_href: value String = "href" @ 2,
                $($body)*
            }
        }
    };

    (
        $(#[$meta:meta])*
        object $name:ident, $builder:ident {
            kind: $kind:literal,
            fields: { $($body:tt)* }
        }
    ) => {
        $crate::object_type! {
            @define
            meta: [$(#[$meta])*],
            name: $name,
            builder: $builder,
            kind: $kind,
            link_kind: None,
            linkable: no,
            fields: { $($body)* }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{BuildError, List, ListBuilder, ObjectType, codec};

    object_type! {
        /// Part of a gadget
        object Part, PartBuilder {
            kind: "Part",
            fields: {
                serial, get_serial: value String = "serial" @ 0,
                weight, get_weight: value f64 = "weight" @ 1,
            }
        }
    }

    object_type! {
        /// A gadget with parts
        resource Gadget, GadgetBuilder {
            kind: "Gadget",
            link_kind: "GadgetLink",
            fields: {
                /// Name of the gadget
                name, get_name: value String = "name" @ 3,
                count, get_count: value i32 = "count" @ 4,
                enabled, get_enabled: value bool = "enabled" @ 5,
                tags, get_tags: value Vec<String> = "tags" @ 6,
                main_part, get_main_part: nested Part = "main_part" @ 7,
                owner, get_owner: nested Owner = "owner" @ 8,
                parts, get_parts: nested List<Part> = "parts" @ 9,
            }
        }
    }

    object_type! {
        resource Owner, OwnerBuilder {
            kind: "Owner",
            link_kind: "OwnerLink",
            fields: {
                email, get_email: value String = "email" @ 3,
            }
        }
    }

    #[test]
    fn test_unset_fields_are_zero() {
        let gadget = Gadget::builder().build().unwrap();
        assert_eq!(gadget.get_name(), None);
        assert_eq!(gadget.name(), "");
        assert_eq!(gadget.get_count(), None);
        assert_eq!(gadget.count(), 0);
        assert!(!gadget.enabled());
        assert!(gadget.tags().is_empty());
        assert!(gadget.get_main_part().is_none());
        assert!(gadget.main_part().is_empty());
        assert!(gadget.is_empty());
    }

    #[test]
    fn test_set_fields_are_present() {
        let gadget = Gadget::builder()
            .name("widget")
            .count(3)
            .enabled(false)
            .build()
            .unwrap();
        assert_eq!(gadget.get_name(), Some("widget"));
        assert_eq!(gadget.get_count(), Some(3));
        // Present even though it holds the zero value
        assert_eq!(gadget.get_enabled(), Some(false));
        assert!(!gadget.is_empty());
    }

    #[test]
    fn test_link_flag_alone_is_empty() {
        let gadget = Gadget::builder().link(true).id("1").build().unwrap();
        assert!(gadget.link());
        assert_eq!(gadget.kind(), "GadgetLink");
        assert!(!gadget.is_empty());

        let builder = Gadget::builder().link(true);
        assert!(builder.is_empty());
        assert_eq!(Part::builder().serial("x").build().unwrap().kind(), "Part");
    }

    #[test]
    fn test_link_without_target_fails() {
        let err = Gadget::builder().link(true).build().unwrap_err();
        assert_eq!(err, BuildError::LinkWithoutTarget { kind: "Gadget" });

        assert!(Gadget::builder().link(true).href("/gadgets/1").build().is_ok());
    }

    #[test]
    fn test_nested_failure_aborts_parent() {
        let err = Gadget::builder()
            .name("g")
            .owner(Owner::builder().link(true))
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::LinkWithoutTarget { kind: "Owner" });
    }

    #[test]
    fn test_list_item_failure_aborts_parent() {
        let parts: ListBuilder<Owner> = [Owner::builder().id("a"), Owner::builder().link(true)]
            .into_iter()
            .collect();
        let err = parts.build().unwrap_err();
        assert!(matches!(err, BuildError::ListItem { index: 1, .. }));
    }

    #[test]
    fn test_none_clears_nested_field() {
        let gadget = Gadget::builder()
            .main_part(Part::builder().serial("s1"))
            .main_part(None)
            .build()
            .unwrap();
        assert!(gadget.get_main_part().is_none());
        assert!(gadget.is_empty());
    }

    #[test]
    fn test_copy_is_deep() {
        let original = Gadget::builder()
            .id("42")
            .name("orig")
            .main_part(Part::builder().serial("s1").weight(2.5))
            .parts(ListBuilder::<Part>::new().push(Part::builder().serial("p1")))
            .build()
            .unwrap();

        let patched = Gadget::builder()
            .copy(&original)
            .name("patched")
            .build()
            .unwrap();

        assert_eq!(original.name(), "orig");
        assert_eq!(patched.name(), "patched");
        assert_eq!(patched.id(), "42");
        assert_eq!(patched.main_part().weight(), 2.5);
        assert_eq!(patched.parts().len(), 1);
    }

    #[test]
    fn test_serialize_present_fields_only() {
        let gadget = Gadget::builder()
            .id("7")
            .name("g")
            .tags(Vec::<String>::new())
            .build()
            .unwrap();
        let json = codec::to_string(&gadget).unwrap();
        assert_eq!(json, r#"{"kind":"Gadget","id":"7","name":"g"}"#);
    }

    #[test]
    fn test_serialize_link() {
        let gadget = Gadget::builder().link(true).id("7").build().unwrap();
        let json = codec::to_string(&gadget).unwrap();
        assert_eq!(json, r#"{"kind":"GadgetLink","id":"7"}"#);
    }

    #[test]
    fn test_deserialize_skips_unknown_and_null() {
        let json = r#"{
            "unknown": {"deep": [1, 2, 3]},
            "name": "g",
            "kind": "GadgetLink",
            "count": null,
            "id": "9",
            "main_part": {"serial": "s", "extra": true}
        }"#;
        let gadget: Gadget = codec::from_str(json).unwrap();
        assert!(gadget.link());
        assert_eq!(gadget.get_id(), Some("9"));
        assert_eq!(gadget.get_name(), Some("g"));
        assert_eq!(gadget.get_count(), None);
        assert_eq!(gadget.main_part().get_serial(), Some("s"));
    }

    #[test]
    fn test_round_trip() {
        let gadget = Gadget::builder()
            .id("1")
            .href("/gadgets/1")
            .name("full")
            .count(-4)
            .enabled(true)
            .tags(vec!["a".to_string(), "b".to_string()])
            .owner(Owner::builder().link(true).id("o1"))
            .parts(
                ListBuilder::<Part>::new()
                    .push(Part::builder().serial("p1"))
                    .push(Part::builder().weight(1.5)),
            )
            .build()
            .unwrap();

        let json = codec::to_vec(&gadget).unwrap();
        let decoded: Gadget = codec::from_slice(&json).unwrap();
        assert_eq!(decoded, gadget);
    }

    #[test]
    fn test_object_type_constants() {
        assert_eq!(Gadget::KIND, "Gadget");
        assert_eq!(Gadget::LINK_KIND, Some("GadgetLink"));
        assert_eq!(Gadget::LIST_KIND, "GadgetList");
        assert_eq!(Gadget::LIST_LINK_KIND, "GadgetListLink");
        assert_eq!(Part::LINK_KIND, None);
    }

    #[test]
    fn test_list_accessors() {
        let list: List<Part> = ListBuilder::<Part>::new()
            .push(Part::builder().serial("a"))
            .push(Part::builder().serial("b"))
            .push(Part::builder().serial("c"))
            .build()
            .unwrap();

        assert_eq!(list.len(), 3);
        assert_eq!(list.get(1).map(Part::serial), Some("b"));
        assert!(list.get(3).is_none());
        assert_eq!(list.kind(), "PartList");

        let mut seen = Vec::new();
        list.each(|part| {
            seen.push(part.serial().to_string());
            part.serial() != "b"
        });
        assert_eq!(seen, vec!["a", "b"]);

        let mut indices = Vec::new();
        list.range(|index, _| {
            indices.push(index);
            false
        });
        assert_eq!(indices, vec![0]);

        let mut copy = list.to_vec();
        copy.clear();
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_list_link_forms() {
        let json = r#"{"kind":"PartListLink","href":"/parts","ignored":1}"#;
        let list: List<Part> = codec::from_str(json).unwrap();
        assert!(list.link());
        assert_eq!(list.get_href(), Some("/parts"));
        assert!(list.is_empty());
        assert_eq!(codec::to_string(&list).unwrap(), r#"{"kind":"PartListLink","href":"/parts"}"#);

        let list: List<Part> = codec::from_str(r#"[{"serial":"x"}]"#).unwrap();
        assert!(!list.link());
        assert_eq!(list.len(), 1);
        assert_eq!(codec::to_string(&list).unwrap(), r#"[{"serial":"x"}]"#);
    }

    #[test]
    fn test_many_fields_beyond_word_width() {
        object_type! {
            object Wide, WideBuilder {
                kind: "Wide",
                fields: {
                    a, get_a: value i32 = "a" @ 0,
                    z, get_z: value String = "z" @ 70,
                }
            }
        }

        let wide = Wide::builder().z("far").build().unwrap();
        assert_eq!(wide.get_a(), None);
        assert_eq!(wide.get_z(), Some("far"));
        assert_eq!(codec::to_string(&wide).unwrap(), r#"{"z":"far"}"#);
    }
}
