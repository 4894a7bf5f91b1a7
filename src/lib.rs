pub mod core {
    pub mod ballistics;
    pub mod camera;
    pub mod params;
    pub mod playback;
    pub mod plot;
    pub mod recorder;
    pub mod scene;
    pub mod scheduler;
    pub mod session;

    #[cfg(test)]
    mod proptest_ballistics;
}
