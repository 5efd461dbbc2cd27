use super::*;

#[bench]
fn get_1000(b: &mut Bencher) {
    let mut p = param(|| 42);

    b.iter(|| for _ in 0..1000 { test::black_box(p.get_or_evaluate()); })
}

#[bench]
fn get_100000(b: &mut Bencher) {
    let mut p = param(|| 42);

    b.iter(|| for _ in 0..100000 { test::black_box(p.get_or_evaluate()); })
}

#[bench]
fn force_1000(b: &mut Bencher) {
    let mut p = param(|| 42);

    b.iter(|| for _ in 0..1000 { test::black_box(p.force_evaluate()); })
}
