#[macro_export]
macro_rules! models {
    (
        $( $model:ident ),*
    ) => {{
        let mut builder = rowmap::Db::builder();
        $( builder.register::<$model>(); )*
        builder
    }};
}
