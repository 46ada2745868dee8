use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::hint::black_box;
use uhub_kernel::prelude::*;
use uhub_kernel::unification::fields;

const STAGE: ObjectType = ObjectType::Crm(CrmObject::Stage);

#[derive(Serialize, Deserialize)]
struct UnifiedStage {
    stage_name: String,
    #[serde(default)]
    field_mappings: Vec<CustomFieldValue>,
}

#[derive(Serialize, Deserialize)]
struct RemoteStage {
    name: String,
    #[serde(flatten)]
    custom: Map<String, Value>,
}

struct BenchStageMapper;

impl ProviderMapper for BenchStageMapper {
    const OBJECT_TYPE: ObjectType = STAGE;
    const PROVIDER: &'static str = "bench";

    type UnifiedInput = UnifiedStage;
    type UnifiedOutput = UnifiedStage;
    type RemoteInput = RemoteStage;
    type RemoteOutput = RemoteStage;

    fn desunify(&self, source: UnifiedStage, mappings: &[FieldMapping]) -> Result<RemoteStage, MapperFault> {
        Ok(RemoteStage { name: source.stage_name, custom: fields::project_outbound(&source.field_mappings, mappings) })
    }

    fn unify(
        &self,
        source: RemoteStage,
        raw: &Map<String, Value>,
        mappings: &[FieldMapping],
    ) -> Result<UnifiedStage, MapperFault> {
        Ok(UnifiedStage { stage_name: source.name, field_mappings: fields::project_inbound(raw, mappings) })
    }
}

fn bench_unify_many(c: &mut Criterion) {
    let unifier = Unifier::new(MappingRegistry::builder().mapper(BenchStageMapper).build());
    let mappings: Vec<FieldMapping> =
        (0..8).map(|i| FieldMapping::new(format!("slug_{i}"), format!("cf_{i}"))).collect();

    let mut group = c.benchmark_group("unify_many");
    for size in [1_usize, 100, 1_000] {
        let batch: Vec<Value> = (0..size)
            .map(|i| json!({"name": format!("stage {i}"), "cf_0": i, "cf_3": "x", "cf_7": null}))
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &batch, |b, batch| {
            b.iter(|| {
                unifier
                    .unify_many(black_box(batch.clone()), STAGE, "bench", &mappings, UnifyOptions::default())
                    .unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_unify_many);
criterion_main!(benches);
