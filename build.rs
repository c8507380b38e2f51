fn main() {
    // ESP-IDF link/env args are only needed for the firmware target.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
