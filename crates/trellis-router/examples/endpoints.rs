//! REST Endpoint Registration Example
//!
//! Registers a small product/order API, compiles it and resolves a batch of
//! raw request lines, showing the prepared-template diagnostics and the
//! typed parameters each match extracts.
//!
//! Run with: cargo run --example endpoints

use trellis_router::{ParamKind, Router};

/// The handler reference an embedding application would dispatch on. Kept as
/// a plain name here; real transports hold a callback or an actor address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    ListProducts,
    ProductDetail,
    ProductReviews,
    FeaturedProducts,
    CreateOrder,
    OrderDetail,
}

fn main() {
    let mut router: Router<Endpoint> = Router::new();
    router.on_register(|record| {
        println!("registered {:<30} -> {}", record.template, record.prepared);
    });

    let int = &[ParamKind::Int];
    router.get("/products", &[], Endpoint::ListProducts).unwrap();
    router.get("/products/{?}", int, Endpoint::ProductDetail).unwrap();
    router
        .get("/products/{?}/reviews", int, Endpoint::ProductReviews)
        .unwrap();
    router
        .get("/products/featured", &[], Endpoint::FeaturedProducts)
        .unwrap();
    router.post("/orders", &[], Endpoint::CreateOrder).unwrap();
    router.get("/orders/{?}", int, Endpoint::OrderDetail).unwrap();

    let matcher = router.compile().expect("registrations compile");
    println!(
        "\ncompiled {} routes into {} decision nodes\n",
        router.routes().len(),
        matcher.node_count()
    );

    let requests: &[&[u8]] = &[
        b"GET /products ",
        b"GET /products/42 ",
        b"GET /products/42/reviews ",
        b"GET /products/featured ",
        b"POST /orders ",
        b"GET /orders/9000 ",
        b"GET /orders/nine-thousand ",
        b"DELETE /products/42 ",
    ];

    for line in requests {
        let shown = String::from_utf8_lossy(line);
        match router.resolve(line).expect("matcher is current") {
            Some(hit) => println!("{shown:<30} -> {:?} {:?}", hit.handler, hit.params),
            None => println!("{shown:<30} -> no match (404)"),
        }
    }
}
