//! Timer helpers shared by the tracker and counter coroutines.

/// Frame interval used by the count-up ticker (about 60 fps).
pub const FRAME_MS: u64 = 16;

/// Platform-appropriate async sleep.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        let clamped = ms.min(u32::MAX as u64) as u32;
        gloo_timers::future::TimeoutFuture::new(clamped).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}
