#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigInt;

use linrec_core::evaluator::Evaluator;
use linrec_core::recurrence::RecurrenceSpec;
use linrec_core::ring::Modular;

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }
    // Byte 0: order (1..=6), bytes 1..9: index, then coefficient/seed bytes.
    let k = usize::from(data[0] % 6) + 1;
    let n = u64::from_le_bytes(data[1..9].try_into().unwrap());
    let body = &data[9..];
    if body.len() < 2 * k {
        return;
    }
    let signed = |b: u8| i64::from(b as i8);
    let coefficients: Vec<BigInt> = body[..k].iter().map(|&b| BigInt::from(signed(b))).collect();
    let seeds: Vec<BigInt> = body[k..2 * k].iter().map(|&b| BigInt::from(signed(b))).collect();

    // Modular evaluation must never panic, whatever the index.
    let modulus = BigInt::from(1_000_000_007u64);
    let value = linrec_core::nth_term(k, &coefficients, &seeds, Some(&modulus), n);
    if n == 0 {
        assert!(value.is_err());
        return;
    }
    let value = value.unwrap();
    assert!(value < modulus);

    // The cached evaluator agrees with the facade.
    let ring = Modular::new(1_000_000_007).unwrap();
    let spec = RecurrenceSpec::from_parts(
        ring,
        coefficients.iter().map(|c| ring.reduce_big(c)).collect(),
        seeds.iter().map(|s| ring.reduce_big(s)).collect(),
    )
    .unwrap();
    let eval = Evaluator::new(spec).unwrap();
    assert_eq!(BigInt::from(eval.nth_term(n).unwrap()), value);

    // Small indices also agree with exact arithmetic.
    if n <= 200 {
        let exact = linrec_core::nth_term(k, &coefficients, &seeds, None, n).unwrap();
        let reduced = ((exact % &modulus) + &modulus) % &modulus;
        assert_eq!(reduced, value);
    }
});
