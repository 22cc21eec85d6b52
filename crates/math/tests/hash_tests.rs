use math::{Murmur3x64, Murmur3x86, fmix32, fmix64, hash, hash32, hash64};

fn words64(bytes: &[u8]) -> Vec<u64> {
    bytes
        .chunks_exact(8)
        .map(|chunk| u64::from_le_bytes(chunk.try_into().unwrap()))
        .collect()
}

// Reference MurmurHash3_x64_128 for inputs that are a whole number of blocks.
fn x64_128_blocks(bytes: &[u8], seed: u64) -> (u64, u64) {
    assert_eq!(bytes.len() % 16, 0);
    let mut state = Murmur3x64::with_seed(seed);
    for pair in words64(bytes).chunks_exact(2) {
        state.mix_block(pair[0], pair[1]);
    }
    state.finish(bytes.len() as u64)
}

// Reference MurmurHash3_x86_32 for inputs that are a whole number of blocks.
fn x86_32_blocks(bytes: &[u8], seed: u32) -> u32 {
    assert_eq!(bytes.len() % 4, 0);
    let mut state = Murmur3x86::with_seed(seed);
    for chunk in bytes.chunks_exact(4) {
        state.mix(u32::from_le_bytes(chunk.try_into().unwrap()));
    }
    state.finish(bytes.len() as u32)
}

// --- Reference vectors ---

#[test]
fn test_x86_32_reference_vectors() {
    assert_eq!(x86_32_blocks(&[], 0), 0);
    assert_eq!(x86_32_blocks(&[], 1), 0x514e_28b7);
    assert_eq!(x86_32_blocks(&[], 0xffff_ffff), 0x81f1_6f39);
    assert_eq!(x86_32_blocks(&[0xff, 0xff, 0xff, 0xff], 0), 0x7629_3b50);
    assert_eq!(x86_32_blocks(&[0x21, 0x43, 0x65, 0x87], 0), 0xf55b_516b);
    assert_eq!(x86_32_blocks(&[0x21, 0x43, 0x65, 0x87], 0x5082_edee), 0x2362_f9de);
    assert_eq!(x86_32_blocks(&[0, 0, 0, 0], 0), 0x2362_f9de);
}

#[test]
fn test_x64_128_reference_vectors() {
    assert_eq!(x64_128_blocks(&[], 0), (0, 0));

    let bytes: Vec<u8> = (0..32).collect();
    assert_eq!(
        x64_128_blocks(&bytes[..16], 0),
        (0x4449_24b5_9190_3f30, 0xab90_6456_762f_e845)
    );
    assert_eq!(
        x64_128_blocks(&bytes, 0x9747_b28c),
        (0xeceb_57eb_b0b9_5c96, 0xaa70_3262_aeff_47e0)
    );
}

#[test]
fn test_fmix_values() {
    assert_eq!(fmix64(1), 0xb456_bcfc_34c2_cb2c);
    assert_eq!(fmix64(u64::MAX), 0x64b5_720b_4b82_5f21);
    assert_eq!(fmix32(u32::MAX), 0x81f1_6f39);
}

// --- 64-bit variant ---

#[test]
fn test_hash64_pinned() {
    assert_eq!(hash64(&[]), 7_552_929_352_038_478_427);
    assert_eq!(hash64(&[0]), -4_061_737_833_765_482_311);
    assert_eq!(hash64(&[-1]), 6_607_794_017_644_387_133);
    assert_eq!(hash64(&[1, 2]), -4_230_321_578_367_266_643);
    assert_eq!(hash64(&[1, 2, 3, 4]), -3_618_758_426_860_114_775);
}

#[test]
fn test_hash64_odd_length() {
    // the trailing element goes through the first lane only
    assert_eq!(hash64(&[1]), 1_173_427_028_827_951_296);
    assert_eq!(hash64(&[1, 2, 3]), 116_967_651_676_353_274);
    assert_ne!(hash64(&[1]), hash64(&[]));
}

#[test]
fn test_hash64_order_sensitive() {
    assert_eq!(hash64(&[2, 1]), 1_895_349_828_185_713_650);
    assert_ne!(hash64(&[1, 2]), hash64(&[2, 1]));
}

#[test]
fn test_hash64_deterministic() {
    assert_eq!(hash64(&[1, 2, 3]), hash64(&[1, 2, 3]));
    let owned = vec![1_i64, 2, 3];
    assert_eq!(hash64(&owned), hash64(&[1, 2, 3]));
}

#[test]
fn test_hash64_depends_on_count() {
    assert_ne!(hash64(&[0]), hash64(&[0, 0]));
    assert_ne!(hash64(&[0, 0]), hash64(&[0, 0, 0]));
}

// --- 32-bit variant ---

#[test]
fn test_hash32_pinned() {
    assert_eq!(hash32(&[]), 1_728_272_531);
    assert_eq!(hash32(&[0]), 425_525_071);
    assert_eq!(hash32(&[-1]), 886_328_809);
    assert_eq!(hash32(&[1]), 750_637_651);
    assert_eq!(hash32(&[1, 2]), -1_627_750_894);
    assert_eq!(hash32(&[2, 1]), 778_972_736);
    assert_eq!(hash32(&[1, 2, 3]), -519_973_328);
    assert_eq!(hash32(&[1, 2, 3, 4]), -1_421_116_130);
}

// --- Native width ---

#[cfg(target_pointer_width = "64")]
#[test]
fn test_native_hash_is_x64() {
    assert_eq!(hash(&[1, 2, 3]) as i64, hash64(&[1, 2, 3]));
    assert_eq!(hash(&[]) as i64, hash64(&[]));
    assert_eq!(hash(&[-1]) as i64, hash64(&[-1]));
}

#[cfg(not(target_pointer_width = "64"))]
#[test]
fn test_native_hash_is_x86() {
    assert_eq!(hash(&[1, 2, 3]) as i32, hash32(&[1, 2, 3]));
    assert_eq!(hash(&[]) as i32, hash32(&[]));
    assert_eq!(hash(&[-1]) as i32, hash32(&[-1]));
}

#[test]
fn test_hash_macro() {
    assert_eq!(math::hash!(1, 2, 3), hash(&[1, 2, 3]));
    assert_eq!(math::hash!(), hash(&[]));
    assert_eq!(math::hash!(-4_i32, 5_u8,), hash(&[-4, 5]));
}
