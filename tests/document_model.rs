use print_document::document::{
    ContentType, DescriptorError, DocumentDescriptor, DocumentDescriptorBuilder, PageCount,
};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn make_descriptor(name: &str, pages: i32, content_type: ContentType, size: i64) -> DocumentDescriptor {
    let mut builder = DocumentDescriptorBuilder::new(name).expect("valid name");
    builder.page_count(pages).expect("valid page count");
    builder.content_type(content_type);
    let mut descriptor = builder.build();
    descriptor.set_data_size(size);
    descriptor
}

fn hash_of(descriptor: &DocumentDescriptor) -> u64 {
    let mut hasher = DefaultHasher::new();
    descriptor.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn invariant_empty_name_rejected() {
    let result = DocumentDescriptorBuilder::new("");
    assert!(matches!(result, Err(DescriptorError::EmptyName)));

    let result = DocumentDescriptor::builder(String::new());
    assert!(matches!(result, Err(DescriptorError::EmptyName)));
}

#[test]
fn invariant_page_count_sentinel_accepted() {
    let mut builder = DocumentDescriptorBuilder::new("Report").unwrap();
    assert!(builder.page_count(-1).is_ok());
    assert_eq!(builder.build().page_count(), PageCount::UNKNOWN);

    assert!(builder.page_count(0).is_ok());
    assert_eq!(builder.build().page_count().known(), Some(0));
}

#[test]
fn invariant_other_negative_page_counts_rejected() {
    let mut builder = DocumentDescriptorBuilder::new("Report").unwrap();
    builder.page_count(7).unwrap();

    let err = builder.page_count(-2).unwrap_err();
    assert_eq!(err, DescriptorError::InvalidPageCount(-2));

    // Rejected assignment keeps the previous value.
    assert_eq!(builder.build().page_count().as_i32(), 7);
}

#[test]
fn defaults_are_unknown_and_zero() {
    let descriptor = DocumentDescriptorBuilder::new("Scan").unwrap().build();

    assert_eq!(descriptor.name(), "Scan");
    assert_eq!(descriptor.page_count(), PageCount::UNKNOWN);
    assert_eq!(descriptor.content_type(), ContentType::Unknown);
    assert_eq!(descriptor.data_size(), 0);
}

#[test]
fn report_example_set_data_size_changes_only_size() {
    let mut descriptor = DocumentDescriptorBuilder::new("Report")
        .unwrap()
        .page_count(3)
        .unwrap()
        .content_type(ContentType::Document)
        .build();
    assert_eq!(descriptor.data_size(), 0);

    descriptor.set_data_size(2048);

    assert_eq!(descriptor.name(), "Report");
    assert_eq!(descriptor.page_count().as_i32(), 3);
    assert_eq!(descriptor.content_type(), ContentType::Document);
    assert_eq!(descriptor.data_size(), 2048);

    let fresh = make_descriptor("Report", 3, ContentType::Document, 2048);
    assert_eq!(descriptor, fresh);
}

#[test]
fn set_data_size_accepts_negative_values() {
    let mut descriptor = make_descriptor("Report", 1, ContentType::Photo, 0);
    descriptor.set_data_size(-5);
    assert_eq!(descriptor.data_size(), -5);
}

#[test]
fn repeated_builds_are_independent() {
    let mut builder = DocumentDescriptorBuilder::new("Album").unwrap();
    builder.page_count(2).unwrap();

    let mut first = builder.build();
    let second = builder.build();
    assert_eq!(first, second);

    first.set_data_size(100);
    assert_ne!(first, second);
    assert_eq!(second.data_size(), 0);

    builder.content_type(ContentType::Photo);
    let third = builder.build();
    assert_eq!(second.content_type(), ContentType::Unknown);
    assert_eq!(third.content_type(), ContentType::Photo);
}

#[test]
fn equal_fields_give_equal_values_and_hashes() {
    let a = make_descriptor("Report", 3, ContentType::Document, 2048);
    let b = make_descriptor("Report", 3, ContentType::Document, 2048);

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn changing_any_field_breaks_equality() {
    let base = make_descriptor("Report", 3, ContentType::Document, 2048);

    let variants = [
        make_descriptor("Report2", 3, ContentType::Document, 2048),
        make_descriptor("Report", 4, ContentType::Document, 2048),
        make_descriptor("Report", -1, ContentType::Document, 2048),
        make_descriptor("Report", 3, ContentType::Photo, 2048),
        make_descriptor("Report", 3, ContentType::Document, 2049),
    ];

    for variant in &variants {
        assert_ne!(&base, variant, "{variant} should differ from {base}");
    }
}

#[test]
fn to_builder_carries_every_field() {
    let original = make_descriptor("Report", 3, ContentType::Document, 2048);

    let copy = original.to_builder().build();
    assert_eq!(copy, original);

    let mut builder = original.to_builder();
    builder.page_count(10).unwrap();
    let updated = builder.build();
    assert_eq!(updated.page_count().as_i32(), 10);
    assert_eq!(updated.data_size(), 2048);
    assert_eq!(original.page_count().as_i32(), 3);
}

#[test]
fn display_names_content_type_symbolically() {
    let descriptor = make_descriptor("Report", 3, ContentType::Document, 2048);
    assert_eq!(
        descriptor.to_string(),
        "DocumentDescriptor{name=Report, pageCount=3, contentType=DOCUMENT, size=2048}"
    );

    let unknown = DocumentDescriptorBuilder::new("x").unwrap().build();
    assert_eq!(
        unknown.to_string(),
        "DocumentDescriptor{name=x, pageCount=-1, contentType=UNKNOWN, size=0}"
    );
}

#[test]
fn descriptor_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DocumentDescriptor>();

    let descriptor = std::sync::Arc::new(make_descriptor("Shared", 1, ContentType::Photo, 9));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let d = descriptor.clone();
            std::thread::spawn(move || d.fingerprint())
        })
        .collect();

    let expected = descriptor.fingerprint();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
