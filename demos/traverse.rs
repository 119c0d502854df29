use avl_core::{AvlTreeMap, Node};

fn print_subtree(node: Option<&Node<i32, &str>>, depth: usize) {
    if let Some(node) = node {
        print_subtree(node.right(), depth + 1);
        println!(
            "{:indent$}{} => {} (height {})",
            "",
            node.key(),
            node.value(),
            node.height(),
            indent = depth * 4
        );
        print_subtree(node.left(), depth + 1);
    }
}

fn main() {
    let mut map = AvlTreeMap::new();
    map.add(1, "1");
    map.add(2, "2");
    map.add(3, "3");
    map.add(4, "4");
    map.add(5, "5");
    map.add(6, "6");

    println!("Pre-order traversal:");
    for node in map.pre_order_traversal() {
        println!("Key: {}, Value: {}", node.key(), node.value());
    }

    println!("Tree:");
    print_subtree(map.root(), 0);
}
