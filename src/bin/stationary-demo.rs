use anyhow::Result;
use clap::Parser;
use faer::Mat;
use stationary::matrix::DenseMatrix;
use stationary::{LinearSystem, Method, SolveOptions};

const ABOUT: &str = "
Solves the 3x3 diagonally dominant system

    [10 -1  2] [x0]   [  6]
    [-1 11 -1] [x1] = [ 25]
    [ 2 -1 10] [x2]   [-11]

with stationary iterative methods and prints one report per method.";

#[derive(Parser)]
#[command(about = ABOUT, name = "stationary-demo")]
struct Opt {
    /// Method to run (jacobi, gauss-seidel). May be repeated; defaults to both.
    #[arg(short, long = "method")]
    methods: Vec<String>,

    /// Tolerance on the scaled residual ‖Ax − b‖ / ‖b‖.
    #[arg(short, long, default_value_t = 1e-16)]
    tol: f64,

    /// Maximum number of sweeps.
    #[arg(short = 'n', long, default_value_t = 20_000)]
    max_iters: usize,
}

pub fn main() {
    if let Err(err) = try_main() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

pub fn try_main() -> Result<()> {
    let _ = env_logger::Builder::from_env("STATIONARY_LOG").try_init();

    let opt = Opt::parse();

    let methods = if opt.methods.is_empty() {
        Method::ALL.to_vec()
    } else {
        opt.methods
            .iter()
            .map(|m| m.parse::<Method>())
            .collect::<Result<Vec<_>, _>>()?
    };

    let a = <Mat<f64> as DenseMatrix<f64>>::from_rows(&[
        [10.0, -1.0, 2.0],
        [-1.0, 11.0, -1.0],
        [2.0, -1.0, 10.0],
    ]);
    let system = LinearSystem::new(a, vec![6.0, 25.0, -11.0])?;
    let opts = SolveOptions::default()
        .with_tol(opt.tol)
        .with_max_iters(opt.max_iters);

    for (k, method) in methods.into_iter().enumerate() {
        if k > 0 {
            println!("\n");
        }
        let solution = system.solve_with(method, &opts)?;
        println!("{}", solution);
    }
    Ok(())
}
