use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use campusdash::filter::{self, UserCategory, UserFilterCache};
use campusdash::model::mail::{Folder, LabelFilter};
use campusdash::model::user::UserRecord;
use campusdash::store::seed::SeedData;
use campusdash::store::Snapshot;

/// The seed users repeated until there are a few thousand of them.
fn many_users() -> Vec<UserRecord> {
    let seed = SeedData::builtin().unwrap();
    (0..500)
        .flat_map(|round| {
            seed.users.iter().map(move |u| UserRecord {
                id: round * 100 + u.id,
                ..u.clone()
            })
        })
        .collect()
}

fn bench_select_users(c: &mut Criterion) {
    let users = many_users();
    c.bench_function("select_users_student", |b| {
        b.iter(|| filter::select_user_indices(black_box(&users), UserCategory::Student))
    });
}

fn bench_memoised_category(c: &mut Criterion) {
    let users = Snapshot::new(1, Rc::from(many_users()));
    let mut cache = UserFilterCache::new(8);
    c.bench_function("memoised_category_hit", |b| {
        b.iter(|| cache.select(black_box(&users), UserCategory::Administrator))
    });
}

fn bench_select_messages(c: &mut Criterion) {
    let seed = SeedData::builtin().unwrap();
    c.bench_function("select_messages_inbox", |b| {
        b.iter(|| {
            filter::select_message_indices(
                black_box(&seed.messages),
                Folder::Inbox,
                LabelFilter::All,
            )
        })
    });
}

criterion_group!(
    benches,
    bench_select_users,
    bench_memoised_category,
    bench_select_messages
);
criterion_main!(benches);
