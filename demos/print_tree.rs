use int_avl::{delete, inorder_listing, insert, release, validate};

fn main() {
    let mut root = None;
    for key in [5, 3, 8, 1, 4, 7, 9] {
        root = Some(insert(root, key, format!("value {key}")));
    }
    println!("Before removing 5:");
    print!("{}", inorder_listing(root.as_deref()));

    root = delete(root, 5);
    println!("After removing 5:");
    print!("{}", inorder_listing(root.as_deref()));

    match validate(root.as_deref()) {
        Ok(len) => println!("{len} entries, tree is balanced"),
        Err(violation) => println!("broken tree: {violation}"),
    }
    release(root);
}
