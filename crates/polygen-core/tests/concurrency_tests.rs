//! Concurrency tests for the shared resolver cache
//!
//! Generation units run in parallel and share one resolver. These tests hammer
//! it from many threads and check that every thread sees the same answers.

use polygen_core::{
    NullabilityKey, NullabilityPolicy, Resolver, TargetProfile, TargetType, TypeMapping,
    TypeNode, TypeTemplate,
};
use rayon::prelude::*;
use std::sync::{Arc, Barrier};
use std::thread;

fn profiles() -> Vec<TargetProfile> {
    let wrapping = TargetProfile::builder("wrapping", "Jvm", "Jackson")
        .primitive("string", TypeMapping::reference(TargetType::new("String")))
        .primitive(
            "int32",
            TypeMapping::boxed(TargetType::new("int"), TargetType::new("Integer")),
        )
        .nullability_for_all_primitives(NullabilityPolicy::WrapperClass)
        .nullability(NullabilityKey::Named, NullabilityPolicy::NativeNullable)
        .build();
    let optional = TargetProfile::builder("optional", "Py", "dataclasses")
        .primitive("string", TypeMapping::reference(TargetType::new("str")))
        .primitive("int32", TypeMapping::reference(TargetType::new("int")))
        .nullability_for_all_primitives(NullabilityPolicy::NativeOptional)
        .nullability(NullabilityKey::Named, NullabilityPolicy::NativeOptional)
        .optional_syntax(TypeTemplate::new("Optional[{}]").with_import("typing.Optional"))
        .build();
    vec![wrapping, optional]
}

fn nodes() -> Vec<TypeNode> {
    vec![
        TypeNode::primitive("string"),
        TypeNode::nullable(TypeNode::primitive("string")),
        TypeNode::primitive("int32"),
        TypeNode::nullable(TypeNode::primitive("int32")),
        TypeNode::nullable(TypeNode::named("address")),
    ]
}

#[test]
fn test_concurrent_resolution_agrees_with_sequential() {
    let profiles = profiles();
    let nodes = nodes();

    let sequential = Resolver::new();
    let expected: Vec<_> = profiles
        .iter()
        .flat_map(|p| nodes.iter().map(|n| sequential.resolve(n, p)))
        .collect();

    let shared = Resolver::new();
    let actual: Vec<_> = (0..64)
        .into_par_iter()
        .map(|_| {
            profiles
                .iter()
                .flat_map(|p| nodes.iter().map(|n| shared.resolve(n, p)))
                .collect::<Vec<_>>()
        })
        .collect();

    for run in actual {
        assert_eq!(run, expected);
    }
    assert_eq!(shared.stats().entries, profiles.len() * nodes.len());
}

#[test]
fn test_concurrent_threads_share_cache_entries() {
    let resolver = Arc::new(Resolver::new());
    let profile = Arc::new(profiles().remove(0));
    let num_threads = 16;
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|_| {
            let resolver = resolver.clone();
            let profile = profile.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..100 {
                    let resolved = resolver
                        .resolve(&TypeNode::nullable(TypeNode::primitive("string")), &profile)
                        .unwrap();
                    assert_eq!(resolved.type_expr(), "NotnullString");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let stats = resolver.stats();
    assert_eq!(stats.entries, 1);
    assert_eq!(stats.hits + stats.misses, (num_threads * 100) as u64);
}
