use std::{
	io,
	fs::{self, File},
	path::{Path, PathBuf},
};


/// Run the test for each file in the given directory, recursively. The path is relative
/// to the crate root.
pub fn test_dir<P, F>(path: P, mut test: F) -> io::Result<usize>
where
	P: AsRef<Path>,
	F: FnMut(&Path, File) -> io::Result<()>,
{
	let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	dir.push(path);

	fn run<F>(dir: &Path, test: &mut F) -> io::Result<usize>
	where
		F: FnMut(&Path, File) -> io::Result<()>,
	{
		let mut count = 0;

		for entry in fs::read_dir(dir)? {
			let path = entry?.path();

			if path.is_dir() {
				count += run(&path, test)?;
			} else {
				let file = File::open(&path)?;
				test(&path, file)?;
				count += 1;
			}
		}

		Ok(count)
	}

	run(&dir, &mut test)
}
