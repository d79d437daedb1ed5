// Codec benchmarks for ledger-transact.
//
// Covers address derivation and parsing, canonical encode/decode of
// payments and asset transfers, type sniffing, signature attachment and
// group id assignment at various sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use ledger_transact::transaction::{
    attach_signature, group_transactions, peek_transaction_type, AssetTransferFields,
    PaymentFields, Transaction, TransactionBuilder,
};
use ledger_transact::Address;

fn payment(amount: u64) -> Transaction {
    TransactionBuilder::new(Address::from([1u8; 32]))
        .fee(1000)
        .first_valid(50_659_540)
        .last_valid(50_660_540)
        .genesis_id("testnet-v1.0")
        .genesis_hash([0x48u8; 32])
        .note(b"0aa50d27-b8f7-4d77-a1fb-551fd55df2bc".to_vec())
        .payment(PaymentFields::new(Address::from([2u8; 32]), amount))
        .build()
        .expect("bench payment")
}

fn asset_transfer() -> Transaction {
    let mut fields = AssetTransferFields::new(31_566_704, Address::from([3u8; 32]), 2_500);
    fields.close_remainder_to = Some(Address::from([4u8; 32]));
    TransactionBuilder::new(Address::from([1u8; 32]))
        .fee(2000)
        .first_valid(7)
        .last_valid(1007)
        .lease([5u8; 32])
        .asset_transfer(fields)
        .build()
        .expect("bench asset transfer")
}

fn bench_address(c: &mut Criterion) {
    let key = [0x8au8; 32];
    let encoded = Address::from(key).to_string();

    c.bench_function("address/from_pubkey_encode", |b| {
        b.iter(|| Address::from(black_box(key)).to_string());
    });
    c.bench_function("address/from_string", |b| {
        b.iter(|| Address::from_string(black_box(&encoded)));
    });
}

fn bench_encode(c: &mut Criterion) {
    let pay = payment(101_000);
    let axfer = asset_transfer();

    c.bench_function("codec/encode_payment", |b| {
        b.iter(|| black_box(&pay).encode());
    });
    c.bench_function("codec/encode_asset_transfer", |b| {
        b.iter(|| black_box(&axfer).encode());
    });
    c.bench_function("codec/transaction_id", |b| {
        b.iter(|| black_box(&pay).id());
    });
}

fn bench_decode(c: &mut Criterion) {
    let pay = payment(101_000).encode().expect("encode");
    let axfer = asset_transfer().encode().expect("encode");

    c.bench_function("codec/decode_payment", |b| {
        b.iter(|| Transaction::decode(black_box(&pay)));
    });
    c.bench_function("codec/decode_asset_transfer", |b| {
        b.iter(|| Transaction::decode(black_box(&axfer)));
    });
    c.bench_function("codec/peek_transaction_type", |b| {
        b.iter(|| peek_transaction_type(black_box(&axfer)));
    });
}

fn bench_attach_signature(c: &mut Criterion) {
    let encoded = payment(1).encode().expect("encode");
    let signature = [0x5au8; 64];

    c.bench_function("envelope/attach_signature", |b| {
        b.iter(|| attach_signature(black_box(&encoded), black_box(&signature)));
    });
}

fn bench_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("group/assign");

    for size in [2usize, 8, 16] {
        let txs: Vec<Transaction> = (0..size as u64).map(payment).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txs, |b, txs| {
            b.iter(|| group_transactions(txs));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_address,
    bench_encode,
    bench_decode,
    bench_attach_signature,
    bench_group,
);
criterion_main!(benches);
