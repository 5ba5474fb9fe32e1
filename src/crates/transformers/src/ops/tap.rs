use pipekit_pipeline::Transformer;
use pipekit_primitives::Value;

/// Call `observer` with the value and pass the value on unchanged.
pub fn tap<F>(observer: F) -> Transformer
where
    F: Fn(&Value) + Send + Sync + 'static,
{
    Transformer::named("tap", move |value| {
        observer(&value);
        Ok(value)
    })
}
