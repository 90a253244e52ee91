//! Recommendation Throughput Benchmark
//!
//! Measures fit and query latency of the vector-space recommender over
//! synthetic corpora at the sizes the platform targets (hundreds to a few
//! thousand recipes, fully in memory).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pantry_core::RecipeRecord;
use pantry_engine::Recommender;
use rand::Rng;

/// Ingredient pool for generating realistic recipes.
const INGREDIENTS: &[&str] = &[
    "chicken breast",
    "ground beef",
    "salmon",
    "tofu",
    "lentils",
    "rice",
    "pasta",
    "quinoa",
    "potatoes",
    "sweet potato",
    "onion",
    "garlic",
    "tomatoes",
    "bell pepper",
    "spinach",
    "kale",
    "broccoli",
    "carrots",
    "mushrooms",
    "zucchini",
    "olive oil",
    "butter",
    "soy sauce",
    "lemon",
    "lime",
    "basil",
    "oregano",
    "cumin",
    "paprika",
    "black pepper",
    "milk",
    "cheese",
    "yogurt",
    "eggs",
    "flour",
    "bread",
    "avocado",
    "chickpeas",
    "black beans",
    "corn",
];

/// Generates a corpus of `size` recipes with 4-9 ingredients each.
fn generate_corpus(size: usize) -> Vec<RecipeRecord> {
    let mut rng = rand::thread_rng();
    (0..size)
        .map(|i| {
            let count = rng.gen_range(4..10);
            let ingredients = (0..count)
                .map(|_| INGREDIENTS[rng.gen_range(0..INGREDIENTS.len())].to_string())
                .collect();
            RecipeRecord {
                name: format!("Recipe {i}"),
                description: format!("Synthetic recipe number {i}"),
                ingredients,
            }
        })
        .collect()
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");

    for size in [100, 500, 2000] {
        let records = generate_corpus(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| Recommender::fit(black_box(records.clone())));
        });
    }

    group.finish();
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    for size in [100, 500, 2000] {
        let recommender = Recommender::fit(generate_corpus(size));
        let query: Vec<String> = ["chicken breast", "rice", "garlic", "olive oil"]
            .iter()
            .map(|s| (*s).to_string())
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &recommender,
            |b, recommender| {
                b.iter(|| recommender.recommend(black_box(&query), 5));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_fit, bench_recommend);
criterion_main!(benches);
