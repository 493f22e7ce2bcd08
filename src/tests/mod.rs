// src/tests/mod.rs - Centralized unit tests for bitbuffer


pub mod range_tests;




pub mod test_utils {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    pub fn init_logger() {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    }

    // Fixed seed so failures reproduce
    pub fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5EED_B175)
    }
}
