#![feature(test)]
extern crate test;

macro_rules! bench {
    ($name: ident, $engine: path, $bs: expr) => {
        #[bench]
        fn $name(b: &mut Bencher) {
            let mut d = <$engine>::new();
            let data = [0; $bs];

            b.iter(|| {
                d.update(&data).unwrap();
            });

            b.bytes = $bs;
        }
    };

    ($engine: path) => {
        use test::Bencher;

        bench!(bench1_10, $engine, 10);
        bench!(bench2_100, $engine, 100);
        bench!(bench3_1000, $engine, 1000);
        bench!(bench4_10000, $engine, 10000);
    };
}

bench!(sha256::Sha256);
