//! Relative JSON Pointer Performance Benchmarks
//!
//! Plain timing loops for:
//! - Parsing relative pointer text
//! - Computing absolute pointers from a base
//! - Resolving values and names against a document

use std::hint::black_box;
use std::time::{Duration, Instant};

use reljsonpointer::{JsonPointer, RelJsonPointer, Rjp};
use serde_json::{json, Value};

const ITERATIONS: u32 = 100_000;

fn main() {
    println!("Relative JSON Pointer Benchmarks\n");

    bench_parse();
    bench_to_absolute();
    bench_resolve();
}

fn report(name: &str, elapsed: Duration) {
    let per_op = elapsed / ITERATIONS;
    println!("  {name:<32} {per_op:>10.2?} per op ({ITERATIONS} iterations)");
}

fn time<F: FnMut()>(mut f: F) -> Duration {
    let start = Instant::now();
    for _ in 0..ITERATIONS {
        f();
    }
    start.elapsed()
}

fn bench_parse() {
    println!("1. Parsing");
    for expr in ["0", "12#", "3+4", "2-1/foo/bar/baz", "1/a~1b/c~0d"] {
        let elapsed = time(|| {
            black_box(RelJsonPointer::parse(black_box(expr)).ok());
        });
        report(expr, elapsed);
    }
    println!();
}

fn bench_to_absolute() {
    println!("2. Absolute pointer computation");
    let base = JsonPointer::parse("/a/b/c/3/d/e").unwrap_or_default();
    for expr in ["0", "2", "3+1/x", "4#"] {
        let Ok(rjp) = RelJsonPointer::parse(expr) else {
            println!("  {expr}: failed to parse");
            continue;
        };
        let elapsed = time(|| {
            black_box(rjp.to_absolute(black_box(&base)).ok());
        });
        report(expr, elapsed);
    }

    let Ok(rjp) = RelJsonPointer::parse("2/x") else {
        return;
    };
    let elapsed = time(|| {
        black_box(rjp.to_absolute(black_box("/a/b/c/3/d/e")).ok());
    });
    report("2/x (textual base)", elapsed);
    println!();
}

fn document() -> Value {
    let items: Vec<Value> = (0..64)
        .map(|i| json!({"id": i, "name": format!("item-{i}"), "tags": ["a", "b", "c"]}))
        .collect();
    json!({"store": {"items": items, "owner": {"name": "someone"}}})
}

fn bench_resolve() {
    println!("3. Resolution");
    let doc = document();
    let base = "/store/items/31/tags/2";
    for expr in ["0", "1/0", "2+1/name", "3/owner/name", "1#", "2#", "0-2", "1/-"] {
        let elapsed = time(|| {
            black_box(Rjp::expr(expr).from(base).resolve(black_box(&doc)).ok());
        });
        report(expr, elapsed);
    }
    println!();
}
